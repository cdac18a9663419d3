//! Band, mode, and dialect enums plus the static lookup tables behind them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical frequency code in kHz, as written in submission logs.
pub type FrequencyCode = u32;

/// HF contest band bucket.
///
/// Variants are declared from 160m down to 10m, lowest frequency first.
/// Reports list them the other way round, see [`Band::REPORT_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Band {
    /// 160 meters.
    #[serde(rename = "160m")]
    B160m,
    /// 80 meters.
    #[serde(rename = "80m")]
    B80m,
    /// 40 meters.
    #[serde(rename = "40m")]
    B40m,
    /// 20 meters.
    #[serde(rename = "20m")]
    B20m,
    /// 15 meters.
    #[serde(rename = "15m")]
    B15m,
    /// 10 meters.
    #[serde(rename = "10m")]
    B10m,
}

// (band, code, label, lower edge kHz, upper edge kHz)
static BAND_TABLE: [(Band, FrequencyCode, &str, u32, u32); 6] = [
    (Band::B160m, 1800, "160m", 1800, 2000),
    (Band::B80m, 3500, "80m", 3500, 4000),
    (Band::B40m, 7000, "40m", 7000, 7300),
    (Band::B20m, 14000, "20m", 14000, 14350),
    (Band::B15m, 21000, "15m", 21000, 21450),
    (Band::B10m, 28000, "10m", 28000, 29700),
];

impl Band {
    /// All bands, lowest frequency first.
    pub const ALL: [Band; 6] = [
        Band::B160m,
        Band::B80m,
        Band::B40m,
        Band::B20m,
        Band::B15m,
        Band::B10m,
    ];

    /// Report row order: descending frequency, 10m first.
    pub const REPORT_ORDER: [Band; 6] = [
        Band::B10m,
        Band::B15m,
        Band::B20m,
        Band::B40m,
        Band::B80m,
        Band::B160m,
    ];

    fn entry(self) -> &'static (Band, FrequencyCode, &'static str, u32, u32) {
        &BAND_TABLE[self.index()]
    }

    /// Position of this band in [`Band::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical frequency code, e.g. `14000` for 20m.
    pub fn frequency_code(self) -> FrequencyCode {
        self.entry().1
    }

    /// Lower-case band label, e.g. `"20m"`.
    pub fn label(self) -> &'static str {
        self.entry().2
    }

    /// Looks up a band by label, ignoring ASCII case (`"40M"` and `"40m"`).
    pub fn from_label(label: &str) -> Option<Band> {
        let label = label.trim();
        BAND_TABLE
            .iter()
            .find(|(_, _, l, _, _)| l.eq_ignore_ascii_case(label))
            .map(|(band, ..)| *band)
    }

    /// Exact inverse of [`Band::frequency_code`].
    pub fn from_frequency_code(code: FrequencyCode) -> Option<Band> {
        BAND_TABLE
            .iter()
            .find(|(_, c, ..)| *c == code)
            .map(|(band, ..)| *band)
    }

    /// Resolves an operating frequency in kHz to the band whose edges contain it.
    pub fn from_khz(khz: f64) -> Option<Band> {
        BAND_TABLE
            .iter()
            .find(|(_, _, _, lo, hi)| khz >= f64::from(*lo) && khz <= f64::from(*hi))
            .map(|(band, ..)| *band)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Frequency column of a record.
///
/// Band labels the table does not know are carried through untouched rather
/// than mapped to an invented code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    /// A recognized band, written as its canonical code.
    Band(Band),
    /// Raw token with no table entry (possibly empty).
    Unmapped(String),
}

impl Frequency {
    /// The band this frequency resolves to, if any.
    pub fn band(&self) -> Option<Band> {
        match self {
            Frequency::Band(band) => Some(*band),
            Frequency::Unmapped(raw) => raw
                .trim()
                .parse::<FrequencyCode>()
                .ok()
                .and_then(Band::from_frequency_code),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Band(band) => write!(f, "{}", band.frequency_code()),
            Frequency::Unmapped(raw) => f.write_str(raw),
        }
    }
}

/// Maps a band label to its frequency code, passing unknown labels through.
pub fn band_to_frequency(label: &str) -> Frequency {
    match Band::from_label(label) {
        Some(band) => Frequency::Band(band),
        None => Frequency::Unmapped(label.to_string()),
    }
}

/// Maps a frequency code back to its band label; `None` for unknown codes.
pub fn frequency_to_band(code: &str) -> Option<&'static str> {
    code.trim()
        .parse::<FrequencyCode>()
        .ok()
        .and_then(Band::from_frequency_code)
        .map(Band::label)
}

/// Canonical submission mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mode {
    /// Continuous Wave.
    CW,
    /// Phone (SSB family).
    PH,
    /// Radio teletype.
    RY,
    /// Any other digital mode.
    DG,
}

impl Mode {
    /// All modes in report column order.
    pub const ALL: [Mode; 4] = [Mode::CW, Mode::PH, Mode::RY, Mode::DG];

    /// Position of this mode in [`Mode::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Two-letter submission token.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::CW => "CW",
            Mode::PH => "PH",
            Mode::RY => "RY",
            Mode::DG => "DG",
        }
    }

    /// Parses an already-canonical token. Unlike [`normalize_mode`] this does
    /// not fold unknown tokens into [`Mode::DG`].
    pub fn from_canonical(token: &str) -> Option<Mode> {
        Mode::ALL.into_iter().find(|m| m.as_str() == token)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Folds a logger's mode token onto the four canonical modes.
///
/// Matching is exact. Everything that is not `SSB`, `CW`, or `RTTY` lands in
/// [`Mode::DG`].
pub fn normalize_mode(raw: &str) -> Mode {
    match raw {
        "SSB" => Mode::PH,
        "CW" => Mode::CW,
        "RTTY" => Mode::RY,
        _ => Mode::DG,
    }
}

/// Textual log encodings understood by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// `<field:len>value` tag/value exchange files.
    Adif,
    /// Whitespace-delimited per-station export files.
    FixedToken,
    /// Line-oriented contest submission files.
    Cabrillo,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dialect::Adif => "adif",
            Dialect::FixedToken => "fixed-token",
            Dialect::Cabrillo => "cabrillo",
        })
    }
}
