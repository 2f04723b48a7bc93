//! The event logger: enrichment and hand-off to a router.

use std::fmt::Write as _;
use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};

use fieldlog_core::logging::{Level, is_enabled, targets, trace, warn};
use fieldlog_core::{Fields, SORT_FIELDS_KEY, Value};
use fieldlog_router::Router;

use crate::config::{Config, FileLineMode, TimestampFormat};
use crate::default_router;

/// Field stamped with the event timestamp.
pub const FIELD_TIME: &str = "time";

/// Field stamped with the logger's configured name.
pub const FIELD_LOGGER: &str = "logger";

/// Field stamped with the call site as `file:line`.
pub const FIELD_FILE: &str = "file";

/// Stamps context fields onto events and hands them to a router.
///
/// A logger is a cheap, cloneable front end; all delivery state lives in
/// the router it is bound to. Caller-provided fields always win: enrichment
/// never overwrites a key that is already present in the event.
#[derive(Clone)]
pub struct Logger {
    name: Option<String>,
    timestamp: Option<TimestampFormat>,
    utc: bool,
    file_line: FileLineMode,
    sort_fields: bool,
    router: Arc<Router>,
}

impl Logger {
    /// Builds a logger from `config`, binding it to the configured router
    /// or to the process-wide default.
    #[must_use]
    pub fn new(config: Config) -> Self {
        if let Some(TimestampFormat::Custom(pattern)) = &config.timestamp {
            if !pattern_is_renderable(pattern) {
                warn!(
                    target: targets::LOGGER,
                    "Timestamp pattern {:?} does not render; events will fall back to RFC 3339",
                    pattern
                );
            }
        }
        let router = config.router.unwrap_or_else(default_router);
        if is_enabled(Level::Trace, targets::LOGGER) {
            trace!(
                target: targets::LOGGER,
                "Logger created (name: {:?}, destinations: {})",
                config.name,
                router.destination_count()
            );
        }
        Self {
            name: config.name,
            timestamp: config.timestamp,
            utc: config.utc,
            file_line: config.file_line,
            sort_fields: config.sort_fields,
            router,
        }
    }

    /// The router this logger delivers through.
    #[must_use]
    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    /// Stamps context onto `fields` and delivers the event.
    ///
    /// Stamped keys are [`FIELD_TIME`], [`FIELD_LOGGER`], [`FIELD_FILE`],
    /// and the sort flag, each subject to configuration and each skipped
    /// when the caller already set it. Never returns an error; delivery
    /// failures go to the router's error hook.
    #[track_caller]
    pub fn log(&self, mut fields: Fields) {
        let caller = Location::caller();
        if let Some(format) = &self.timestamp {
            if !fields.contains_key(FIELD_TIME) {
                fields.insert(FIELD_TIME, render_timestamp(format, self.utc, Utc::now()));
            }
        }
        if let Some(name) = &self.name {
            if !fields.contains_key(FIELD_LOGGER) {
                fields.insert(FIELD_LOGGER, name.as_str());
            }
        }
        if self.file_line != FileLineMode::Off && !fields.contains_key(FIELD_FILE) {
            let short = self.file_line == FileLineMode::Short;
            fields.insert(FIELD_FILE, render_location(caller, short));
        }
        if self.sort_fields && !fields.contains_key(SORT_FIELDS_KEY) {
            fields.insert(SORT_FIELDS_KEY, true);
        }
        self.router.log(&fields);
    }
}

/// Renders `now` according to the configured format.
///
/// `utc: false` converts to the local offset first; the epoch-based formats
/// are offset-independent.
fn render_timestamp(format: &TimestampFormat, utc: bool, now: DateTime<Utc>) -> Value {
    match format {
        TimestampFormat::Rfc3339 => {
            if utc {
                Value::from(now.to_rfc3339_opts(SecondsFormat::Secs, true))
            } else {
                Value::from(
                    now.with_timezone(&Local)
                        .to_rfc3339_opts(SecondsFormat::Secs, false),
                )
            }
        }
        TimestampFormat::UnixSeconds => Value::from(now.timestamp()),
        TimestampFormat::UnixNanos => Value::from(now.timestamp_nanos_opt().unwrap_or(i64::MAX)),
        TimestampFormat::Custom(pattern) => {
            if utc {
                Value::from(render_strftime(&now, pattern, true))
            } else {
                Value::from(render_strftime(&now.with_timezone(&Local), pattern, false))
            }
        }
    }
}

/// Renders a strftime pattern, falling back to RFC 3339 when the pattern
/// is invalid. A bad pattern must not panic the log call.
fn render_strftime<Tz>(dt: &DateTime<Tz>, pattern: &str, use_z: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut rendered = String::new();
    if write!(rendered, "{}", dt.format(pattern)).is_err() {
        return dt.to_rfc3339_opts(SecondsFormat::Secs, use_z);
    }
    rendered
}

/// Probes whether a strftime pattern renders at all.
fn pattern_is_renderable(pattern: &str) -> bool {
    let mut probe = String::new();
    write!(probe, "{}", Utc::now().format(pattern)).is_ok()
}

/// Renders the call site as `file:line`.
fn render_location(caller: &Location<'_>, short: bool) -> String {
    let file = caller.file();
    let file = if short {
        file.rsplit(['/', '\\']).next().unwrap_or(file)
    } else {
        file
    };
    format!("{}:{}", file, caller.line())
}
