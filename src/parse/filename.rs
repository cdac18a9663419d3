use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::qso::RawFields;

/// Raw field key for the filename-derived station callsign.
pub const FILE_CALL: &str = "file_call";
/// Raw field key for the filename-derived band label.
pub const FILE_BAND: &str = "file_band";
/// Raw field key for the filename-derived mode token.
pub const FILE_MODE: &str = "file_mode";

fn filename_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.+)-(.+)-(.+)\.txt$").expect("filename regex"))
}

/// Station metadata encoded in a `<callsign>-<band>-<mode>.txt` filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationFileMeta {
    /// Logging station callsign.
    pub callsign: String,
    /// Band label as written in the filename, e.g. `20M`.
    pub band: String,
    /// Mode token as written in the filename, e.g. `SSB`.
    pub mode: String,
}

impl StationFileMeta {
    /// Extracts metadata from `filename`; `None` when it does not follow the
    /// convention.
    ///
    /// The callsign takes everything up to the second-to-last dash, so
    /// `W1-ABC-20M-CW.txt` yields callsign `W1-ABC`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let caps = filename_regex().captures(filename)?;
        Some(Self {
            callsign: caps[1].to_string(),
            band: caps[2].to_string(),
            mode: caps[3].to_string(),
        })
    }

    /// Adds the filename-derived values under [`FILE_CALL`], [`FILE_BAND`],
    /// and [`FILE_MODE`], where the record builder uses them as fallbacks.
    pub fn fill_fields(&self, fields: &mut RawFields) {
        fields.insert(FILE_CALL.to_string(), self.callsign.clone());
        fields.insert(FILE_BAND.to_string(), self.band.clone());
        fields.insert(FILE_MODE.to_string(), self.mode.clone());
    }
}
