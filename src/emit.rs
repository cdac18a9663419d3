//! Submission-log (Cabrillo) serialization.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{header::SessionHeader, qso::QsoRecord};

/// Prefix of every contact line.
pub const QSO_MARKER: &str = "QSO:";
/// Sentinel line closing the log.
pub const END_OF_LOG: &str = "END-OF-LOG:";

/// `KEY: value` lines in header order.
pub fn emit_header(header: &SessionHeader) -> Vec<String> {
    header
        .fields()
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect()
}

/// One `QSO:` line with whitespace runs collapsed, so empty fields vanish.
pub fn emit_record(rec: &QsoRecord) -> String {
    let line = format!(
        "{QSO_MARKER} {} {} {} {} {} {} {} {} {} {}",
        rec.frequency,
        rec.mode,
        rec.date,
        rec.time,
        rec.my_callsign,
        rec.my_class,
        rec.my_section,
        rec.their_callsign,
        rec.their_class,
        rec.their_section,
    );
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Streams a complete submission log: header, blank line, records, sentinel.
pub struct CabrilloWriter<W: Write> {
    out: W,
}

impl<W: Write> CabrilloWriter<W> {
    /// Writes the header block and separator.
    pub fn start(mut out: W, header: &SessionHeader) -> io::Result<Self> {
        for line in emit_header(header) {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        Ok(Self { out })
    }

    /// Appends one contact line.
    pub fn write_record(&mut self, rec: &QsoRecord) -> io::Result<()> {
        writeln!(self.out, "{}", emit_record(rec))
    }

    /// Writes the end-of-log sentinel, flushes, and hands back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out, "{END_OF_LOG}")?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Renders a whole log into a string.
pub fn emit_log<'r>(header: &SessionHeader, records: impl IntoIterator<Item = &'r QsoRecord>) -> String {
    let mut out = emit_header(header).join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out.push('\n');
    for rec in records {
        out.push_str(&emit_record(rec));
        out.push('\n');
    }
    out.push_str(END_OF_LOG);
    out.push('\n');
    out
}

/// Output path for a submission log: `path` itself when it already ends in
/// `.cab` (any case), otherwise `path` with `.cab` appended.
pub fn cabrillo_path(path: &Path) -> PathBuf {
    let has_cab = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("cab"));
    if has_cab {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".cab");
        PathBuf::from(name)
    }
}
