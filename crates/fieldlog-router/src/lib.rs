//! Destination routing for fieldlog.
//!
//! This crate provides the delivery layer:
//! - Named destination registration with wholesale replacement
//! - Per-destination filters and formatters
//! - Disabled placeholders that keep an id registered without output
//! - Error isolation per destination, observed through an error hook
//!
//! One [`Router`] serves any number of threads; see [`Router`] for the
//! locking contract.

#![forbid(unsafe_code)]

mod destination;
mod error;
mod router;


pub use destination::Destination;
pub use error::RouteError;
pub use router::{ErrorHook, Router};
