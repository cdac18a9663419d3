//! Canonical QSO record, raw field maps, and per-run session context.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::types::{Frequency, Mode};

/// Raw field name (lower-cased) to raw value, as produced by a dialect parser.
pub type RawFields = HashMap<String, String>;

/// Identity of the logging station, fixed for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionContext {
    /// Logging station callsign.
    pub my_callsign: String,
    /// Logging station class, e.g. `6A`.
    pub my_class: String,
    /// Logging station section, e.g. `NNJ`.
    pub my_section: String,
}

/// Fully normalized contact, ready to emit in any dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QsoRecord {
    /// Band as a canonical frequency code, or the raw token when unmapped.
    pub frequency: Frequency,
    /// Canonical mode.
    pub mode: Mode,
    /// `YYYY-MM-DD`, empty when the source carried no date.
    pub date: String,
    /// `HHMM`, empty when the source carried no time.
    pub time: String,
    /// Logging station callsign.
    pub my_callsign: String,
    /// Logging station class.
    pub my_class: String,
    /// Logging station section.
    pub my_section: String,
    /// Contacted station callsign.
    pub their_callsign: String,
    /// Contacted station class.
    pub their_class: String,
    /// Contacted station section.
    pub their_section: String,
}
