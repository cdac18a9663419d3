//! Error kinds raised while parsing, normalizing, and converting logs.

use thiserror::Error;

use crate::types::Dialect;

/// A date or time token did not match its dialect's pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Date token rejected.
    #[error("malformed {dialect} date: {raw:?}")]
    MalformedDate {
        /// Dialect whose pattern was expected.
        dialect: Dialect,
        /// Token as it appeared in the input.
        raw: String,
    },
    /// Time token rejected.
    #[error("malformed {dialect} time: {raw:?}")]
    MalformedTime {
        /// Dialect whose pattern was expected.
        dialect: Dialect,
        /// Token as it appeared in the input.
        raw: String,
    },
}

/// Line-level tokenization failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A fixed-token line carried fewer fields than a record needs.
    #[error("malformed record: {found} tokens, {required} required")]
    MalformedRecord {
        /// Tokens present on the line.
        found: usize,
        /// Tokens a record needs.
        required: usize,
    },
}

/// A single record could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The line did not tokenize.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A field failed normalization.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Whole-run conversion failure.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Reading or writing a log failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The session header file could not be decoded.
    #[error("header config: {0}")]
    Config(#[from] serde_json::Error),
    /// Header config decoded but has the wrong shape.
    #[error("header config: {0}")]
    InvalidHeader(String),
    /// A record failed and the run was configured to abort.
    #[error("{source_name}:{line}: {error}")]
    Aborted {
        /// File or stream the record came from.
        source_name: String,
        /// 1-based line number.
        line: usize,
        /// Underlying record failure.
        error: RecordError,
    },
    /// A background load task panicked or was cancelled.
    #[error("load task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Convenience alias for conversion results.
pub type ConvertResult<T> = Result<T, ConvertError>;
