//! Error handling for VenueKit
//!
//! The editing core has almost no failure modes: invalid gestures are
//! dropped and area mismatches are advisory. Errors exist for the few
//! operations that can genuinely fail:
//! - Layout errors (save preconditions, unknown ids)
//! - Persistence errors (the external load/save collaborator)
//! - Scheduler errors (debounced jobs requested outside a runtime)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;
use uuid::Uuid;

/// Layout document error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A section with seats configured has no drawn shape.
    #[error("Section '{name}' has seats configured but no shape drawn")]
    MissingShape {
        /// The offending section id.
        section: Uuid,
        /// The section name, for display.
        name: String,
    },

    /// Geometry that must never be committed (e.g. polygon with < 3 points).
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Seat radius or spacing multipliers are not finite and positive.
    #[error("Invalid spacing: {0}")]
    InvalidSpacing(String),

    /// No section with this id exists in the document.
    #[error("Unknown section: {0}")]
    UnknownSection(Uuid),

    /// No obstruction with this id exists in the section.
    #[error("Unknown obstruction: {0}")]
    UnknownObstruction(Uuid),
}

/// Persistence collaborator error type.
///
/// The core never retries; these are surfaced to the caller as-is and the
/// in-memory document is left untouched.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The venue has no stored layout.
    #[error("No layout stored for venue '{venue_id}'")]
    NotFound {
        /// The venue that was requested.
        venue_id: String,
    },

    /// The collaborator refused the payload.
    #[error("Layout rejected: {0}")]
    Rejected(String),

    /// I/O error while reading or writing a layout.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Layout payload could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coalescing scheduler error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// A job was requested while no async runtime is running.
    #[error("No async runtime available to schedule the job")]
    NoRuntime,
}

/// Main error type for VenueKit.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Scheduler error
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a persistence error
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }
}

/// Result type alias for VenueKit operations.
pub type Result<T> = std::result::Result<T, Error>;
