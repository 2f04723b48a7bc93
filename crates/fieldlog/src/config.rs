//! Logger configuration.

use std::sync::Arc;

use fieldlog_router::Router;

/// How the caller's source location is rendered into the `file` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileLineMode {
    /// No source location is recorded.
    #[default]
    Off,
    /// Base file name only, like `server.rs:42`.
    Short,
    /// The full path as the compiler saw it.
    Long,
}

/// How the event timestamp is rendered into the `time` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampFormat {
    /// RFC 3339 with seconds precision, as a JSON string.
    Rfc3339,
    /// Whole seconds since the Unix epoch, as a JSON number.
    UnixSeconds,
    /// Nanoseconds since the Unix epoch, as a JSON number.
    UnixNanos,
    /// A chrono `strftime` pattern, as a JSON string.
    Custom(String),
}

/// Configuration consumed by `Logger::new`.
///
/// Every field has a do-nothing default, so partial configuration reads
/// naturally with struct update syntax:
///
/// ```
/// use fieldlog::{Config, Logger, TimestampFormat};
///
/// let logger = Logger::new(Config {
///     name: Some("worker".into()),
///     timestamp: Some(TimestampFormat::Rfc3339),
///     utc: true,
///     ..Config::default()
/// });
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Stamped into every event under the `logger` field.
    pub name: Option<String>,
    /// Timestamp rendering for the `time` field; `None` disables stamping.
    pub timestamp: Option<TimestampFormat>,
    /// Render timestamps in UTC instead of local time.
    pub utc: bool,
    /// Caller location rendering for the `file` field.
    pub file_line: FileLineMode,
    /// Ask formatters to sort keys on every event.
    pub sort_fields: bool,
    /// Destination registry to deliver through; `None` means the
    /// process-wide default router.
    pub router: Option<Arc<Router>>,
}
