//! Destination configuration.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use fieldlog_core::Filter;
use fieldlog_format::Formatter;

/// Configuration for one named output, consumed by registration.
///
/// ```ignore
/// router.register("errors", Destination::to(file).filter(only_errors));
/// ```
///
/// A destination without an explicit formatter uses the router's default at
/// registration time.
pub struct Destination {
    pub(crate) sink: Option<Box<dyn Write + Send>>,
    pub(crate) formatter: Option<Arc<dyn Formatter>>,
    pub(crate) filter: Option<Filter>,
}

impl Destination {
    /// A destination delivering to `sink`.
    #[must_use]
    pub fn to(sink: impl Write + Send + 'static) -> Self {
        Self {
            sink: Some(Box::new(sink)),
            formatter: None,
            filter: None,
        }
    }

    /// A destination that drops every event.
    ///
    /// Registering this under an existing id disables that output while
    /// keeping the id known; registering a sink under the same id again
    /// resumes delivery.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            sink: None,
            formatter: None,
            filter: None,
        }
    }

    /// Sets the formatter, overriding the router's default.
    #[must_use]
    pub fn formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Sets the filter. Only matching events are delivered.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("enabled", &self.sink.is_some())
            .field("custom_formatter", &self.formatter.is_some())
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}
