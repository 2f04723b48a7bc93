//! Record encoding for fieldlog destinations.
//!
//! A [`Formatter`] turns one event into the exact bytes for a sink, not
//! including the record separator. The router owns the separator, so every
//! formatter produces newline-delimited output uniformly.

#![forbid(unsafe_code)]

mod error;
mod json;

pub use error::FormatError;
pub use json::JsonFormatter;

use fieldlog_core::Fields;

/// Byte written after every formatted record.
pub const RECORD_SEPARATOR: u8 = b'\n';

/// Serializes one event into the byte record for a sink.
///
/// Implementations must not append [`RECORD_SEPARATOR`]; the router writes
/// it after every record it delivers.
pub trait Formatter: Send + Sync {
    /// Produces the serialized record for `fields`.
    fn format(&self, fields: &Fields) -> Result<Vec<u8>, FormatError>;
}
