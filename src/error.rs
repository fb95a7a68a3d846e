//! Error types for the rostering engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the store, the calculators,
//! and the payroll exporter.

use thiserror::Error;

/// The kind of record an operation referred to.
///
/// Used by [`RosterError::NotFound`] so callers can tell which collection
/// the missing id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A staff record.
    Staff,
    /// A shift record.
    Shift,
    /// An availability rule.
    Availability,
    /// A timesheet entry.
    Timesheet,
    /// A user account.
    User,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Staff => "staff",
            EntityKind::Shift => "shift",
            EntityKind::Availability => "availability",
            EntityKind::Timesheet => "timesheet",
            EntityKind::User => "user",
        };
        f.write_str(name)
    }
}

/// The main error type for the rostering engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::{EntityKind, RosterError};
///
/// let error = RosterError::NotFound {
///     entity: EntityKind::Shift,
///     id: "missing".to_string(),
/// };
/// assert_eq!(error.to_string(), "No shift found with id 'missing'");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// An update, delete, or clock-out referenced an id that does not exist.
    ///
    /// The original system silently did nothing in this case; the engine
    /// reports it explicitly so callers can distinguish "nothing changed
    /// because the id didn't exist" from "succeeded".
    #[error("No {entity} found with id '{id}'")]
    NotFound {
        /// The collection the id was looked up in.
        entity: EntityKind,
        /// The id that was not found.
        id: String,
    },

    /// A draft record failed validation before mutation.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The snapshot store failed to read or write a collection.
    #[error("Storage failure for collection '{key}': {message}")]
    Storage {
        /// The collection key that failed.
        key: String,
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
