//! Core data model for fieldlog: the field map, dotted-path lookup, and the
//! filter algebra.
//!
//! This crate is synchronous and I/O-free. Higher layers add record encoding
//! (`fieldlog-format`), destination routing (`fieldlog-router`), and the
//! user-facing logger (`fieldlog`).

#![forbid(unsafe_code)]

mod fields;
mod filter;
mod path;

pub mod logging;

pub use fields::{Fields, RESERVED_PREFIX, SORT_FIELDS_KEY};
pub use filter::{Filter, FilterError, PredicateFn};
pub use path::FieldPath;

// Re-exported so every layer shares one JSON value model.
pub use serde_json::{Map, Value, json};
