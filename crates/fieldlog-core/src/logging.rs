//! Internal diagnostics for fieldlog.
//!
//! This module provides logging support for the library's own lifecycle,
//! built on the standard [`log`] facade. Event dispatch itself never logs;
//! only registry and logger lifecycle operations do.
//!
//! # Log Levels
//!
//! - **warn**: Misconfiguration that the library papers over
//! - **debug**: Destination registration, removal, hook replacement
//! - **trace**: Logger construction details
//!
//! # Usage
//!
//! The log macros are re-exported for convenience:
//!
//! ```ignore
//! use fieldlog_core::logging::{debug, targets};
//!
//! debug!(target: targets::ROUTER, "destination {} registered", id);
//! ```
//!
//! # Initialization
//!
//! fieldlog does not include a `log` implementation. Applications that want
//! to see these diagnostics should initialize their preferred backend:
//!
//! ```ignore
//! env_logger::init();
//! ```
//!
//! # Log Targets
//!
//! fieldlog uses hierarchical log targets for filtering:
//!
//! - `fieldlog`: Root target for all fieldlog diagnostics
//! - `fieldlog::router`: Destination registry changes
//! - `fieldlog::logger`: Logger construction and enrichment
//!
//! Example filter: `RUST_LOG=fieldlog::router=debug`

// Re-export log macros for ergonomic use
pub use log::{debug, error, info, trace, warn};

// Re-export log level types for programmatic use
pub use log::{Level, LevelFilter};

/// Log targets used by fieldlog components.
///
/// Use these constants with the `target:` argument to log macros
/// for consistent filtering.
pub mod targets {
    /// Root target for all fieldlog diagnostics.
    pub const FIELDLOG: &str = "fieldlog";

    /// Destination registry changes and error hook replacement.
    pub const ROUTER: &str = "fieldlog::router";

    /// Logger construction and enrichment.
    pub const LOGGER: &str = "fieldlog::logger";
}

/// Returns whether logging is enabled at the given level for the given target.
///
/// This is useful for conditionally computing expensive log message data:
///
/// ```ignore
/// use fieldlog_core::logging::{is_enabled, Level, targets};
///
/// if is_enabled(Level::Debug, targets::ROUTER) {
///     debug!(target: targets::ROUTER, "registry: {:?}", expensive_summary());
/// }
/// ```
#[inline]
#[must_use]
pub fn is_enabled(level: Level, target: &str) -> bool {
    log::log_enabled!(target: target, level)
}
