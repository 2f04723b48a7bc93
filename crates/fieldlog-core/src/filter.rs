//! The filter algebra deciding which destinations receive an event.
//!
//! Filters are finite combinator trees evaluated against a [`Fields`] map.
//! Evaluation is short-circuiting and fallible: a predicate supplied by the
//! caller may fail, and that failure propagates out of every combinator
//! instead of being coerced to a match decision.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::fields::Fields;
use crate::path::FieldPath;

/// Error produced when a filter cannot reach a verdict.
///
/// Built-in combinators never fail. Errors originate in [`Filter::Predicate`]
/// closures and travel unchanged through `And`, `Or`, and `Not`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterError {
    message: String,
}

impl FilterError {
    /// Creates an error with the given description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FilterError {}

/// A caller-supplied predicate wrapped for storage inside a [`Filter`].
///
/// Built with [`Filter::from_fn`]. Clones share the underlying closure.
#[derive(Clone)]
pub struct PredicateFn(Arc<dyn Fn(&Fields) -> Result<bool, FilterError> + Send + Sync>);

impl PredicateFn {
    fn call(&self, fields: &Fields) -> Result<bool, FilterError> {
        (self.0)(fields)
    }
}

impl fmt::Debug for PredicateFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PredicateFn(..)")
    }
}

/// A condition over a [`Fields`] map.
///
/// Combinators nest to arbitrary depth. `And` of nothing matches everything;
/// `Or` of nothing matches nothing.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Matches when the path resolves to any value, including `null`.
    FieldExists(FieldPath),
    /// Matches when the path resolves to a value equal to the expected one.
    ///
    /// Equality is structural JSON equality. An unresolvable path compares
    /// unequal to everything, `null` included.
    Equals(FieldPath, Value),
    /// Matches when every operand matches.
    And(Vec<Filter>),
    /// Matches when at least one operand matches.
    Or(Vec<Filter>),
    /// Inverts its operand.
    Not(Box<Filter>),
    /// Defers to a caller-supplied closure.
    Predicate(PredicateFn),
}

impl Filter {
    /// Shorthand for [`Filter::FieldExists`].
    #[must_use]
    pub fn field_exists(path: impl Into<FieldPath>) -> Self {
        Self::FieldExists(path.into())
    }

    /// Shorthand for [`Filter::Equals`].
    #[must_use]
    pub fn eq(path: impl Into<FieldPath>, expected: impl Into<Value>) -> Self {
        Self::Equals(path.into(), expected.into())
    }

    /// Conjunction of `filters`.
    #[must_use]
    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::And(filters.into_iter().collect())
    }

    /// Disjunction of `filters`.
    #[must_use]
    pub fn or(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::Or(filters.into_iter().collect())
    }

    /// Negation of `filter`.
    #[must_use]
    pub fn not(filter: Filter) -> Self {
        Self::Not(Box::new(filter))
    }

    /// Wraps a closure as a [`Filter::Predicate`].
    #[must_use]
    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(&Fields) -> Result<bool, FilterError> + Send + Sync + 'static,
    {
        Self::Predicate(PredicateFn(Arc::new(predicate)))
    }

    /// Evaluates this filter against `fields`.
    ///
    /// `And` stops at the first non-match, `Or` at the first match, and both
    /// stop at the first error. Operands run in construction order.
    pub fn matches(&self, fields: &Fields) -> Result<bool, FilterError> {
        match self {
            Self::FieldExists(path) => Ok(path.resolve_in(fields).is_some()),
            Self::Equals(path, expected) => Ok(path.resolve_in(fields) == Some(expected)),
            Self::And(operands) => {
                for operand in operands {
                    if !operand.matches(fields)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::Or(operands) => {
                for operand in operands {
                    if operand.matches(fields)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Self::Not(operand) => Ok(!operand.matches(fields)?),
            Self::Predicate(predicate) => predicate.call(fields),
        }
    }
}
