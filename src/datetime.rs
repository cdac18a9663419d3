//! Date and time normalization into `YYYY-MM-DD` and `HHMM`.
//!
//! Each dialect has exactly one accepted encoding. Anything else is an error:
//! a guessed date would silently invalidate a submission.

use chrono::{NaiveDate, NaiveTime};

use crate::{error::NormalizeError, types::Dialect};

const DATE_OUT: &str = "%Y-%m-%d";
const TIME_OUT: &str = "%H%M";

/// Re-emits a dialect date as `YYYY-MM-DD`.
///
/// | dialect | accepted input |
/// |---|---|
/// | [`Dialect::Adif`] | `YYYYMMDD` |
/// | [`Dialect::FixedToken`] | `MM/DD/YY`, optionally followed by the rest of the timestamp |
/// | [`Dialect::Cabrillo`] | `YYYY-MM-DD` |
pub fn normalize_date(dialect: Dialect, raw: &str) -> Result<String, NormalizeError> {
    let malformed = || NormalizeError::MalformedDate {
        dialect,
        raw: raw.to_string(),
    };

    let date = match dialect {
        Dialect::Adif => {
            let raw = raw.trim();
            if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            let year = raw[0..4].parse().map_err(|_| malformed())?;
            let month = raw[4..6].parse().map_err(|_| malformed())?;
            let day = raw[6..8].parse().map_err(|_| malformed())?;
            NaiveDate::from_ymd_opt(year, month, day)
        }
        Dialect::FixedToken => {
            let token = raw.split_whitespace().next().ok_or_else(malformed)?;
            NaiveDate::parse_from_str(token, "%m/%d/%y").ok()
        }
        Dialect::Cabrillo => NaiveDate::parse_from_str(raw.trim(), DATE_OUT).ok(),
    };

    date.map(|d| d.format(DATE_OUT).to_string())
        .ok_or_else(malformed)
}

/// Re-emits a dialect time as 24-hour `HHMM`.
///
/// | dialect | accepted input |
/// |---|---|
/// | [`Dialect::Adif`] | `HHMM` or `HHMMSS` |
/// | [`Dialect::FixedToken`] | full timestamp `date time zone`; the time token may carry colons and a trailing zone letter (`15:30:00`, `1530:00z`) |
/// | [`Dialect::Cabrillo`] | `HHMM` |
pub fn normalize_time(dialect: Dialect, raw: &str) -> Result<String, NormalizeError> {
    let malformed = || NormalizeError::MalformedTime {
        dialect,
        raw: raw.to_string(),
    };

    let digits: String = match dialect {
        Dialect::Adif => {
            let raw = raw.trim();
            if !matches!(raw.len(), 4 | 6) {
                return Err(malformed());
            }
            raw.to_string()
        }
        Dialect::FixedToken => {
            let token = raw.split_whitespace().nth(1).ok_or_else(malformed)?;
            let stripped: String = token.chars().filter(|c| *c != ':').collect();
            let stripped = stripped.trim_end_matches(|c: char| c.is_ascii_alphabetic());
            if stripped.len() < 4 {
                return Err(malformed());
            }
            stripped.to_string()
        }
        Dialect::Cabrillo => {
            let raw = raw.trim();
            if raw.len() != 4 {
                return Err(malformed());
            }
            raw.to_string()
        }
    };

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let hour = digits[0..2].parse().map_err(|_| malformed())?;
    let minute = digits[2..4].parse().map_err(|_| malformed())?;
    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(|t| t.format(TIME_OUT).to_string())
        .ok_or_else(malformed)
}
