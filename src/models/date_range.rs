//! Inclusive date range used by the calculators and the payroll module.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar dates.
///
/// # Example
///
/// ```
/// use roster_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let week = DateRange {
///     start: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
/// };
///
/// assert!(week.contains(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())); // start
/// assert!(week.contains(NaiveDate::from_ymd_opt(2024, 6, 9).unwrap())); // end
/// assert!(!week.contains(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first date in the range (inclusive).
    pub start: NaiveDate,
    /// The last date in the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range from two dates.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Checks whether a date falls within the range, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
