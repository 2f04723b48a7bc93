//! Ordered structured logging with composable routing.
//!
//! `fieldlog` builds log events as ordered field maps, evaluates them
//! against a small filter algebra, formats them (JSON by default), and
//! fans them out to named destinations through a [`Router`]. A [`Logger`]
//! sits in front of a router and stamps context fields onto each event
//! before delivery. Logging never returns an error; per-destination
//! failures are reported to the router's error hook.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use fieldlog::{Config, Destination, Filter, Logger, Router, fields};
//!
//! let router = Arc::new(Router::new());
//! router.register(
//!     "errors",
//!     Destination::to(Vec::<u8>::new()).filter(Filter::eq("level", "error")),
//! );
//!
//! let logger = Logger::new(Config {
//!     name: Some("api".to_owned()),
//!     router: Some(router),
//!     ..Config::default()
//! });
//! logger.log(fields! { "level" => "error", "msg" => "upstream timed out" });
//! ```

#![forbid(unsafe_code)]

mod config;
mod logger;

pub use config::{Config, FileLineMode, TimestampFormat};
pub use logger::{FIELD_FILE, FIELD_LOGGER, FIELD_TIME, Logger};

// The lower layers, re-exported so applications depend on one crate.
pub use fieldlog_core::{
    FieldPath, Fields, Filter, FilterError, Map, PredicateFn, RESERVED_PREFIX, SORT_FIELDS_KEY,
    Value, fields, json, logging,
};
pub use fieldlog_format::{FormatError, Formatter, JsonFormatter, RECORD_SEPARATOR};
pub use fieldlog_router::{Destination, ErrorHook, RouteError, Router};

use std::sync::{Arc, LazyLock};

static DEFAULT_ROUTER: LazyLock<Arc<Router>> = LazyLock::new(|| Arc::new(Router::new()));

/// The process-wide router used by loggers configured without one.
///
/// Starts out with no destinations, so those loggers are silent until
/// something is registered here.
#[must_use]
pub fn default_router() -> Arc<Router> {
    Arc::clone(&DEFAULT_ROUTER)
}
