use std::sync::OnceLock;

use regex::Regex;

use crate::qso::RawFields;

fn field_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Declared length and optional type indicator are read but not trusted;
    // the value runs to the next `<` or end of line.
    RE.get_or_init(|| Regex::new(r"<([^:<>]+):(\d+)(?::[^<>]*)?>([^<]*)").expect("field regex"))
}

/// Extracts every `<name:len>value` pair on `line`, keyed by lower-cased name.
///
/// Lines without markers give an empty map. A repeated name keeps its last
/// value.
pub fn parse_adif_line(line: &str) -> RawFields {
    let mut fields = RawFields::new();
    for caps in field_regex().captures_iter(line) {
        let name = caps[1].trim().to_ascii_lowercase();
        let value = caps[3].trim().to_string();
        fields.insert(name, value);
    }
    fields
}

fn has_marker(line: &str, marker: &str) -> bool {
    line.to_ascii_lowercase().contains(marker)
}

/// One logical tag/value record and the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdifRecord {
    /// 1-based line number of the record's first field.
    pub line: usize,
    /// Merged fields.
    pub fields: RawFields,
}

/// Groups tag/value lines into records.
///
/// Only lines starting with `<` are considered. When the text carries
/// `<eor>` markers, fields accumulate across lines until each marker;
/// otherwise every line is its own record. Everything up to and including
/// the first `<eoh>` line is file header and is dropped in both modes.
pub fn group_adif_records<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<AdifRecord> {
    let mut lines: Vec<(usize, &str)> = lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| line.starts_with('<'))
        .collect();
    if let Some(eoh) = lines.iter().position(|(_, line)| has_marker(line, "<eoh>")) {
        lines.drain(..=eoh);
    }
    let eor_terminated = lines.iter().any(|(_, line)| has_marker(line, "<eor>"));

    let mut records = Vec::new();
    let mut pending: Option<AdifRecord> = None;

    for (line_no, line) in lines {
        let fields = parse_adif_line(line);
        let record = pending.get_or_insert_with(|| AdifRecord {
            line: line_no,
            fields: RawFields::new(),
        });
        record.fields.extend(fields);

        if !eor_terminated || has_marker(line, "<eor>") {
            if let Some(done) = pending.take().filter(|r| !r.fields.is_empty()) {
                records.push(done);
            }
        }
    }

    // Trailing fields with no closing <eor>.
    if let Some(rest) = pending.filter(|r| !r.fields.is_empty()) {
        records.push(rest);
    }
    records
}
