//! The default JSON record formatter.
//!
//! One event becomes one JSON object on a single line. Reserved keys are
//! dropped, and the sort flag selects lexicographic key order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use fieldlog_core::{Fields, RESERVED_PREFIX, SORT_FIELDS_KEY};

use crate::Formatter;
use crate::error::FormatError;

/// Formats events as single-line JSON objects.
///
/// Key order follows insertion order unless the event carries
/// [`SORT_FIELDS_KEY`] set to `true`, in which case top-level keys are
/// emitted in lexicographic order. Reserved keys (prefix `_`) are never
/// part of the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates the formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, fields: &Fields) -> Result<Vec<u8>, FormatError> {
        let record = Record {
            fields,
            sorted: sort_requested(fields),
        };
        Ok(serde_json::to_vec(&record)?)
    }
}

/// Returns whether the event requests sorted keys.
fn sort_requested(fields: &Fields) -> bool {
    matches!(fields.get(SORT_FIELDS_KEY), Some(Value::Bool(true)))
}

/// Serialization view over a field map: skips reserved keys and applies the
/// requested key order. Nested objects keep their own insertion order.
struct Record<'a> {
    fields: &'a Fields,
    sorted: bool,
}

impl Serialize for Record<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut entries: Vec<(&str, &Value)> = self
            .fields
            .iter()
            .filter(|(key, _)| !key.starts_with(RESERVED_PREFIX))
            .map(|(key, value)| (key.as_str(), value))
            .collect();
        if self.sorted {
            entries.sort_unstable_by_key(|(key, _)| *key);
        }
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
