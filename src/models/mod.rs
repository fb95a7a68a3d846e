//! Core data models for the rostering engine.
//!
//! This module contains all the domain records used throughout the engine,
//! the draft (request) types validated at the store boundary, and the serde
//! helpers that pin the persisted wire formats.

mod availability;
mod date_range;
mod shift;
mod staff;
mod staff_hours;
mod timesheet;
mod user;
pub(crate) mod wire;

pub use availability::{Availability, AvailabilityDraft, RecurrenceType};
pub use date_range::DateRange;
pub use shift::{Shift, ShiftDraft};
pub use staff::{Staff, StaffDraft};
pub use staff_hours::StaffHours;
pub use timesheet::{TimesheetDraft, TimesheetEntry};
pub use user::{User, UserRole};
