//! The [`Fields`] map: the payload of a single log event.
//!
//! A `Fields` value is an ordered collection of key/value pairs. Keys are
//! strings; values are arbitrary JSON. Insertion order is preserved, so
//! records serialize the way callers built them unless a formatter is asked
//! to sort.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::path::FieldPath;

/// Keys starting with this prefix carry per-event metadata for the pipeline
/// itself. Formatters exclude them from serialized records.
pub const RESERVED_PREFIX: &str = "_";

/// Reserved key requesting lexicographic key order from the formatter.
///
/// Present and `true` means the record's keys are emitted sorted instead of
/// in insertion order. Any other value leaves ordering untouched.
pub const SORT_FIELDS_KEY: &str = "_sort";

/// An ordered key/value map holding the fields of one log event.
///
/// Backed by a JSON object; any [`Value`] can be stored, including nested
/// objects and arrays. Inserting an existing key replaces its value without
/// moving the key's position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(Map<String, Value>);

impl Fields {
    /// Creates an empty field map.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Inserts a key/value pair, returning the previous value if the key was
    /// already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value stored under a top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if a top-level key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a top-level key, returning its value if it was present.
    /// The remaining keys keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no fields have been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Resolves a dotted path against this map. See [`FieldPath::resolve_in`].
    #[must_use]
    pub fn resolve(&self, path: &FieldPath) -> Option<&Value> {
        path.resolve_in(self)
    }
}

impl IntoIterator for Fields {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Fields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Fields> for Value {
    /// A field map nests into another event as a plain JSON object.
    fn from(fields: Fields) -> Self {
        Value::Object(fields.0)
    }
}

impl TryFrom<Value> for Fields {
    type Error = Value;

    /// Converts a JSON object into a field map. Any other value is handed
    /// back unchanged as the error.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V> Extend<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Builds a [`Fields`] map from `key => value` pairs.
///
/// Values may be anything convertible to a JSON [`Value`], including another
/// `fields!` invocation for nested objects.
///
/// ```
/// use fieldlog_core::fields;
///
/// let event = fields! {
///     "level" => "info",
///     "user" => fields! { "id" => 42 },
/// };
/// assert_eq!(event.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => { $crate::Fields::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(fields.insert($key, $value);)+
        fields
    }};
}
