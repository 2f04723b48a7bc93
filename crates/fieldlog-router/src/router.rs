//! The destination registry and dispatch loop.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use fieldlog_core::logging::{debug, targets};
use fieldlog_core::{Fields, Filter};
use fieldlog_format::{Formatter, JsonFormatter, RECORD_SEPARATOR};

use crate::destination::Destination;
use crate::error::RouteError;

/// Type alias for the error hook callback.
///
/// The hook observes every delivery failure as `(destination id, error)`.
/// It is invoked synchronously on the logging thread, while the registry
/// read lock is held but no sink lock is.
pub type ErrorHook = Arc<dyn Fn(&str, &RouteError) + Send + Sync>;

/// Fans each event out to every registered destination.
///
/// Registration, removal, and dispatch may be called freely from multiple
/// threads. The registry sits behind an `RwLock` and every sink behind its
/// own `Mutex`, so concurrent `log` calls against a shared sink never
/// interleave bytes within a record.
pub struct Router {
    default_formatter: Arc<dyn Formatter>,
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    outputs: HashMap<String, Output>,
    on_error: Option<ErrorHook>,
}

/// One registered destination. `sink: None` means disabled.
struct Output {
    sink: Option<Mutex<Box<dyn Write + Send>>>,
    formatter: Arc<dyn Formatter>,
    filter: Option<Filter>,
}

impl Router {
    /// Creates a router whose destinations default to JSON formatting.
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_formatter(JsonFormatter::new())
    }

    /// Creates a router with a custom default formatter.
    #[must_use]
    pub fn with_default_formatter(formatter: impl Formatter + 'static) -> Self {
        Self {
            default_formatter: Arc::new(formatter),
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Registers `destination` under `id`, replacing any existing
    /// registration wholesale.
    ///
    /// A destination without an explicit formatter captures the router's
    /// default formatter here; the capture is permanent for this
    /// registration.
    pub fn register(&self, id: impl Into<String>, destination: Destination) {
        let id = id.into();
        let output = Output {
            sink: destination.sink.map(Mutex::new),
            formatter: destination
                .formatter
                .unwrap_or_else(|| Arc::clone(&self.default_formatter)),
            filter: destination.filter,
        };
        debug!(
            target: targets::ROUTER,
            "Registering destination: {} (enabled: {})",
            id,
            output.sink.is_some()
        );
        self.write_inner().outputs.insert(id, output);
    }

    /// Removes the destination registered under `id`.
    ///
    /// Returns `true` if something was removed. Events logged afterwards no
    /// longer reach the removed output.
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.write_inner().outputs.remove(id).is_some();
        if removed {
            debug!(target: targets::ROUTER, "Removed destination: {}", id);
        }
        removed
    }

    /// Installs the error hook, replacing any previous one.
    ///
    /// Without a hook, delivery failures are dropped silently.
    pub fn on_error<F>(&self, hook: F)
    where
        F: Fn(&str, &RouteError) + Send + Sync + 'static,
    {
        let mut inner = self.write_inner();
        let replaced = inner.on_error.replace(Arc::new(hook)).is_some();
        drop(inner);
        debug!(target: targets::ROUTER, "Installed error hook (replaced: {})", replaced);
    }

    /// Returns `true` if a destination is registered under `id`, enabled
    /// or not.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.read_inner().outputs.contains_key(id)
    }

    /// Returns the number of registered destinations.
    #[must_use]
    pub fn destination_count(&self) -> usize {
        self.read_inner().outputs.len()
    }

    /// Delivers one event to every registered destination.
    ///
    /// Never returns an error to the caller: each destination fails
    /// independently, and failures go to the error hook. A failed write
    /// abandons the rest of that record, separator included. Destination
    /// visiting order is unspecified.
    pub fn log(&self, fields: &Fields) {
        let inner = self.read_inner();
        for (id, output) in &inner.outputs {
            let Some(sink) = &output.sink else { continue };

            if let Some(filter) = &output.filter {
                match filter.matches(fields) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(err) => {
                        inner.report(id, &RouteError::Filter(err));
                        continue;
                    }
                }
            }

            let record = match output.formatter.format(fields) {
                Ok(record) => record,
                Err(err) => {
                    inner.report(id, &RouteError::Format(err));
                    continue;
                }
            };

            // Record plus separator go out under one lock acquisition, so
            // records from concurrent log calls never interleave.
            let mut guard = sink.lock().unwrap_or_else(PoisonError::into_inner);
            let written = write_record(&mut *guard, &record);
            drop(guard);
            if let Err(err) = written {
                inner.report(id, &RouteError::Write(err));
            }
        }
    }

    /// Acquires the registry read lock.
    ///
    /// A panic inside a user sink or hook must not wedge logging for the
    /// rest of the process, so poisoned locks are taken anyway.
    fn read_inner(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_inner(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("destinations", &self.destination_count())
            .finish_non_exhaustive()
    }
}

impl Inner {
    fn report(&self, id: &str, error: &RouteError) {
        if let Some(hook) = &self.on_error {
            hook(id, error);
        }
    }
}

/// Writes one record followed by the separator.
fn write_record<W: Write + ?Sized>(sink: &mut W, record: &[u8]) -> std::io::Result<()> {
    sink.write_all(record)?;
    sink.write_all(&[RECORD_SEPARATOR])
}
