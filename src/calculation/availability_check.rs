//! Availability evaluation.
//!
//! Decides whether a proposed shift window conflicts with a staff member's
//! declared availability rules. The evaluator is advisory: it flags
//! conflicts for display and never blocks shift creation.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::models::{Availability, RecurrenceType};

/// Evaluates whether a staff member is available for a time window on a
/// given date.
///
/// Rules are matched when they belong to the staff member and either recur
/// weekly on the date's day of week, or apply one-time to that exact date.
/// The policy is then:
///
/// - No matching rules: available. Absence of a rule is no restriction
///   (default-permit).
/// - Any matching rule with `is_available == false`: unavailable.
///   Unavailability wins over every permissive rule for the same day.
/// - Otherwise available only if at least one permissive rule fully
///   contains the `[start, end]` window.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::is_available;
/// use chrono::{NaiveDate, NaiveTime};
///
/// // No rules declared: default-permit
/// let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let start = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
/// assert!(is_available("staff_1", date, start, end, &[]));
/// ```
pub fn is_available(
    staff_id: &str,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    availabilities: &[Availability],
) -> bool {
    let weekday = date.weekday();

    let matching: Vec<&Availability> = availabilities
        .iter()
        .filter(|rule| {
            rule.staff_id == staff_id
                && match rule.recurrence_type {
                    RecurrenceType::Weekly => rule.day_of_week == weekday,
                    RecurrenceType::OneTime => rule.date == Some(date),
                }
        })
        .collect();

    if matching.is_empty() {
        return true;
    }

    // A single blocking rule overrides every permissive one.
    if matching.iter().any(|rule| !rule.is_available) {
        return false;
    }

    matching
        .iter()
        .any(|rule| rule.start_time <= start && end <= rule.end_time)
}
