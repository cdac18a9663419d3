//! Submission header block: an ordered list of `KEY: value` fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{ConvertError, ConvertResult},
    qso::SessionContext,
};

/// `CREATED-BY` value for tag/value conversions.
pub const CREATED_BY_ADIF: &str = "FD-Adif2Cab";
/// `CREATED-BY` value for fixed-token conversions.
pub const CREATED_BY_FIXED: &str = "FD-SQUIRL2CAB";

/// Field Day header keys in emission order, with their fixed defaults.
const FIELD_DAY_TEMPLATE: [(&str, &str); 21] = [
    ("START-OF-LOG", "3.0"),
    ("CONTEST", "ARRL-FD"),
    ("LOCATION", ""),
    ("CALLSIGN", ""),
    ("CATEGORY", ""),
    ("CATEGORY-BAND", "ALL"),
    ("CATEGORY-MODE", "MIXED"),
    ("CATEGORY-OPERATOR", ""),
    ("CATEGORY-POWER", ""),
    ("CATEGORY-STATION", ""),
    ("CLAIMED-SCORE", ""),
    ("CREATED-BY", ""),
    ("NAME", ""),
    ("ADDRESS", ""),
    ("ADDRESS-CITY", ""),
    ("ADDRESS-STATE-PROVINCE", ""),
    ("ADDRESS-POSTALCODE", ""),
    ("ADDRESS-COUNTRY", ""),
    ("EMAIL", ""),
    ("OPERATORS", ""),
    ("SOAPBOX", ""),
];

/// Ordered header metadata carried verbatim into every emitted log.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionHeader {
    fields: Vec<(String, String)>,
}

impl SessionHeader {
    /// Empty header with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// The Field Day template with `CREATED-BY` set to `created_by`.
    pub fn field_day(created_by: &str) -> Self {
        let mut header = Self {
            fields: FIELD_DAY_TEMPLATE
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };
        header.set("CREATED-BY", created_by);
        header
    }

    /// Builds a header from pairs, keeping their order.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the value of an existing key in place, or appends a new field.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key.to_string(), value)),
        }
    }

    /// Fields in emission order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Derives the logging station's identity from `CALLSIGN`, `CATEGORY`,
    /// and `LOCATION`.
    ///
    /// The class is the part of `CATEGORY` before the first space; the
    /// section is the whole `LOCATION`.
    pub fn session_context(&self) -> SessionContext {
        let category = self.get("CATEGORY").unwrap_or_default().trim();
        let my_class = category
            .split_once(' ')
            .map_or(category, |(class, _)| class)
            .to_string();
        SessionContext {
            my_callsign: self.get("CALLSIGN").unwrap_or_default().trim().to_string(),
            my_class,
            my_section: self.get("LOCATION").unwrap_or_default().trim().to_string(),
        }
    }

    /// Overlays header fields from JSON onto `self`.
    ///
    /// Accepts an object (key order kept) or an array of `[key, value]`
    /// pairs. Keys already in `self` keep their position.
    pub fn merge_json(&mut self, json: &str) -> ConvertResult<()> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Object(map) => {
                for (key, value) in map {
                    self.set(&key, scalar_to_string(&key, value)?);
                }
            }
            Value::Array(items) => {
                for item in items {
                    let (key, value): (String, Value) = serde_json::from_value(item)?;
                    let value = scalar_to_string(&key, value)?;
                    self.set(&key, value);
                }
            }
            other => {
                return Err(ConvertError::InvalidHeader(format!(
                    "expected object or array, found {other}"
                )));
            }
        }
        Ok(())
    }

    /// Loads `path` over the Field Day template.
    pub fn load(path: impl AsRef<Path>, created_by: &str) -> ConvertResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let mut header = Self::field_day(created_by);
        header.merge_json(&json)?;
        Ok(header)
    }
}

fn scalar_to_string(key: &str, value: Value) -> ConvertResult<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        _ => Err(ConvertError::InvalidHeader(format!(
            "value for {key} must be a scalar"
        ))),
    }
}
