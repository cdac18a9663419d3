//! Line-scoped tokenizers for the input dialects.

/// Tag/value (`<field:len>value`) tokenizer and record grouping.
pub mod adif;
/// Per-station export filename convention.
pub mod filename;
/// Whitespace-delimited per-station export lines.
pub mod fixed;
