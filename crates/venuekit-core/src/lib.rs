//! # VenueKit Core
//!
//! Core types shared by every VenueKit crate: the error taxonomy, the
//! product tuning constants used as configuration defaults, and callback
//! type aliases for wiring the editor to a renderer.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, LayoutError, PersistenceError, Result, SchedulerError};

pub use types::{shared, RenderCallback, Shared};
