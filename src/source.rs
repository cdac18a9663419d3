//! Discovery and parsing of per-station fixed-token log files.

use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    error::ParseError,
    parse::{filename::StationFileMeta, fixed::parse_fixed_line},
    qso::RawFields,
};

/// A per-station log file whose name follows `<callsign>-<band>-<mode>.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationLogFile {
    /// Location to read from.
    pub path: PathBuf,
    /// Bare file name.
    pub filename: String,
    /// Metadata decoded from the file name.
    pub meta: StationFileMeta,
}

impl StationLogFile {
    /// Wraps `path` when its file name follows the convention.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let filename = path.file_name()?.to_str()?.to_string();
        let meta = StationFileMeta::from_filename(&filename)?;
        Some(Self {
            path,
            filename,
            meta,
        })
    }
}

/// Supplies candidate station files to the converter.
pub trait LogSource {
    /// Candidate files in the order their records should be emitted.
    fn list_candidate_log_files(&self) -> io::Result<Vec<StationLogFile>>;
}

/// Lists `*.txt` files in one directory, sorted by file name.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    dir: PathBuf,
}

impl DirectoryScanner {
    /// Scanner over `dir` (not recursive).
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl LogSource for DirectoryScanner {
    fn list_candidate_log_files(&self) -> io::Result<Vec<StationLogFile>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            match StationLogFile::from_path(entry.path()) {
                Some(file) => files.push(file),
                None => debug!(path = %entry.path().display(), "not a station log, skipping"),
            }
        }
        files.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(files)
    }
}

/// One tokenized line of a station log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationLine {
    /// 1-based line number.
    pub line: usize,
    /// Raw fields with filename metadata filled in, or the tokenization error.
    pub fields: Result<RawFields, ParseError>,
}

/// A station file and its tokenized lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationLog {
    /// File the lines came from.
    pub file: StationLogFile,
    /// Non-blank lines in file order.
    pub lines: Vec<StationLine>,
}

impl StationLog {
    /// Tokenizes `text` as the contents of `file`. Blank lines are skipped.
    pub fn parse(file: StationLogFile, text: &str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| StationLine {
                line: idx + 1,
                fields: parse_fixed_line(line).map(|mut fields| {
                    file.meta.fill_fields(&mut fields);
                    fields
                }),
            })
            .collect();
        Self { file, lines }
    }
}
