//! Calculation logic for the rostering engine.
//!
//! This module contains the pure calculation functions: shift duration in
//! fractional hours (including shifts that cross midnight), summed hours
//! over a date range, and the availability evaluator that decides whether a
//! proposed shift window conflicts with a staff member's declared rules.

mod availability_check;
mod duration;

pub use availability_check::is_available;
pub use duration::{range_duration_hours, shift_duration_hours, shift_hours};
