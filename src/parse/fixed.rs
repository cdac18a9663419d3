use crate::{error::ParseError, qso::RawFields};

/// Tokens a fixed-token line must carry: id, date, time, zone, call, class, section.
pub const FIXED_TOKEN_COUNT: usize = 7;

/// Splits one export line into raw fields.
///
/// Keys: `id`, `timestamp` (tokens 2 to 4 joined by a space), `call`,
/// `class`, `section`. Tokens past the seventh are ignored.
pub fn parse_fixed_line(line: &str) -> Result<RawFields, ParseError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < FIXED_TOKEN_COUNT {
        return Err(ParseError::MalformedRecord {
            found: parts.len(),
            required: FIXED_TOKEN_COUNT,
        });
    }

    let mut fields = RawFields::with_capacity(5);
    fields.insert("id".to_string(), parts[0].to_string());
    fields.insert("timestamp".to_string(), parts[1..4].join(" "));
    fields.insert("call".to_string(), parts[4].to_string());
    fields.insert("class".to_string(), parts[5].to_string());
    fields.insert("section".to_string(), parts[6].to_string());
    Ok(fields)
}
