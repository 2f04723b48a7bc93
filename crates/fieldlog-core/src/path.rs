//! Dotted-path addressing into nested field maps.

use std::fmt;

use serde_json::Value;

use crate::fields::Fields;

/// A parsed dotted path such as `user.id`.
///
/// Splitting happens on every `.`, so keys that themselves contain dots
/// cannot be addressed. An empty segment (from a leading, trailing, or
/// doubled dot) never matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parses a dotted path.
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_owned).collect(),
        }
    }

    /// The individual path segments, in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walks this path through `fields`, descending into nested objects.
    ///
    /// Returns `None` if any segment is missing or an intermediate value is
    /// not an object. A stored JSON `null` still resolves; absence and null
    /// are distinct outcomes.
    #[must_use]
    pub fn resolve_in<'a>(&self, fields: &'a Fields) -> Option<&'a Value> {
        let (first, rest) = self.segments.split_first()?;
        if first.is_empty() {
            return None;
        }
        let mut current = fields.get(first)?;
        for segment in rest {
            if segment.is_empty() {
                return None;
            }
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self::new(&path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
