//! Shift duration calculation.
//!
//! Durations are wall-clock and date-naive: the only calendar awareness is
//! the single-day midnight wrap. A shift whose end time is numerically
//! earlier than its start time ends on the following day.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::models::{DateRange, Shift};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Calculates the duration of a shift in fractional hours.
///
/// The raw difference `end - start` is taken in minutes; if it is strictly
/// negative the shift is treated as crossing midnight and 24 hours are
/// added. Equal start and end times yield zero hours, not a 24-hour wrap.
///
/// # Arguments
///
/// * `start` - The wall-clock start time.
/// * `end` - The wall-clock end time.
///
/// # Returns
///
/// The duration in hours as a Decimal, always in `[0, 24)`.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::shift_duration_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
/// assert_eq!(shift_duration_hours(start, end), Decimal::new(80, 1)); // 8.0
///
/// // Overnight: 23:00 -> 02:00 is 3 hours, not -21
/// let start = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(2, 0, 0).unwrap();
/// assert_eq!(shift_duration_hours(start, end), Decimal::new(30, 1)); // 3.0
/// ```
pub fn shift_duration_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Calculates the duration of a shift from its own start and end times.
pub fn shift_hours(shift: &Shift) -> Decimal {
    shift_duration_hours(shift.start_time, shift.end_time)
}

/// Sums the durations of one staff member's shifts within a date range.
///
/// Only shifts belonging to `staff_id` whose date falls inside the
/// inclusive range contribute.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::range_duration_hours;
/// use roster_engine::models::DateRange;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
/// );
/// assert_eq!(range_duration_hours("staff_1", &range, &[]), Decimal::ZERO);
/// ```
pub fn range_duration_hours(staff_id: &str, range: &DateRange, shifts: &[Shift]) -> Decimal {
    shifts
        .iter()
        .filter(|s| s.staff_id == staff_id && range.contains(s.date))
        .map(shift_hours)
        .sum()
}
