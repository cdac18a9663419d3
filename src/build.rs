//! Raw field maps to canonical [`QsoRecord`]s.

use crate::{
    datetime::{normalize_date, normalize_time},
    error::NormalizeError,
    parse::filename::{FILE_BAND, FILE_CALL, FILE_MODE},
    qso::{QsoRecord, RawFields, SessionContext},
    types::{Band, Dialect, Frequency, band_to_frequency, normalize_mode},
};

/// Builder options that are not part of the session identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Treat `-` in a tag/value comment as a space before splitting it into
    /// class and section (`6A-NNJ` reads as `6A NNJ`).
    pub comment_dash_as_space: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            comment_dash_as_space: true,
        }
    }
}

/// Builds canonical records for one conversion run.
#[derive(Debug, Clone)]
pub struct RecordBuilder<'a> {
    ctx: &'a SessionContext,
    options: BuildOptions,
}

impl<'a> RecordBuilder<'a> {
    /// Builder sharing `ctx` across every record it produces.
    pub fn new(ctx: &'a SessionContext) -> Self {
        Self::with_options(ctx, BuildOptions::default())
    }

    /// Builder with explicit options.
    pub fn with_options(ctx: &'a SessionContext, options: BuildOptions) -> Self {
        Self { ctx, options }
    }

    /// Resolves band, mode, date/time, and exchange fields of `raw`.
    ///
    /// Date and time are read from `qso_date`/`time_on` for tag/value input,
    /// `timestamp` for fixed-token input, and `date`/`time` for submission-log
    /// fields. Absent fields become empty strings. A present but malformed
    /// date or time fails the record.
    pub fn build(&self, dialect: Dialect, raw: &RawFields) -> Result<QsoRecord, NormalizeError> {
        let frequency = resolve_frequency(raw);
        let mode = normalize_mode(field(raw, "mode").or_else(|| field(raw, FILE_MODE)).unwrap_or(""));

        let (date_key, time_key) = match dialect {
            Dialect::Adif => ("qso_date", "time_on"),
            Dialect::FixedToken => ("timestamp", "timestamp"),
            Dialect::Cabrillo => ("date", "time"),
        };
        let date = match field(raw, date_key) {
            Some(v) => normalize_date(dialect, v)?,
            None => String::new(),
        };
        let time = match field(raw, time_key) {
            Some(v) => normalize_time(dialect, v)?,
            None => String::new(),
        };

        let my_callsign = field(raw, "operator")
            .or_else(|| field(raw, FILE_CALL))
            .unwrap_or(self.ctx.my_callsign.as_str())
            .to_string();

        let (comment_class, comment_section) = match dialect {
            Dialect::Adif => self.split_comment(field(raw, "comment").unwrap_or("")),
            _ => (String::new(), String::new()),
        };
        let their_class = field(raw, "class").map_or(comment_class, str::to_string);
        let their_section = field(raw, "section")
            .or_else(|| field(raw, "arrl_sect"))
            .map_or(comment_section, str::to_string);

        Ok(QsoRecord {
            frequency,
            mode,
            date,
            time,
            my_callsign,
            my_class: self.ctx.my_class.clone(),
            my_section: self.ctx.my_section.clone(),
            their_callsign: field(raw, "call").unwrap_or("").to_string(),
            their_class,
            their_section,
        })
    }

    // First token is the class, the rest is the section. A comment with no
    // space has no section.
    fn split_comment(&self, comment: &str) -> (String, String) {
        let comment = if self.options.comment_dash_as_space {
            comment.replace('-', " ")
        } else {
            comment.to_string()
        };
        let comment = comment.trim();
        match comment.split_once(' ') {
            Some((class, section)) => (class.to_string(), section.trim().to_string()),
            None => (comment.to_string(), String::new()),
        }
    }
}

/// Builds one record with default options.
pub fn build_record(
    dialect: Dialect,
    raw: &RawFields,
    ctx: &SessionContext,
) -> Result<QsoRecord, NormalizeError> {
    RecordBuilder::new(ctx).build(dialect, raw)
}

fn field<'r>(raw: &'r RawFields, key: &str) -> Option<&'r str> {
    raw.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

// Explicit band label, then operating frequency in MHz, then filename band.
fn resolve_frequency(raw: &RawFields) -> Frequency {
    if let Some(label) = field(raw, "band") {
        return band_to_frequency(label);
    }
    if let Some(freq) = field(raw, "freq") {
        return freq
            .parse::<f64>()
            .ok()
            .and_then(|mhz| Band::from_khz(mhz * 1000.0))
            .map_or_else(|| Frequency::Unmapped(freq.to_string()), Frequency::Band);
    }
    match field(raw, FILE_BAND) {
        Some(label) => band_to_frequency(label),
        None => Frequency::Unmapped(String::new()),
    }
}
