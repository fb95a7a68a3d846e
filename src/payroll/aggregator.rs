//! Hours-and-pay aggregation over date ranges.

use rust_decimal::Decimal;

use crate::calculation::shift_hours;
use crate::models::{DateRange, Shift, Staff, StaffHours};

/// Which staff members a mark-paid operation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaidScope {
    /// Only shifts belonging to the given staff member.
    Staff(String),
    /// Every staff member's shifts.
    All,
}

impl PaidScope {
    fn matches(&self, shift: &Shift) -> bool {
        match self {
            PaidScope::Staff(id) => shift.staff_id == *id,
            PaidScope::All => true,
        }
    }
}

/// Computes total hours and pay for one staff member over a date range.
///
/// Matches the staff member's shifts whose date falls in the inclusive
/// range, sums their durations (overnight shifts included), and multiplies
/// by the hourly rate.
///
/// # Example
///
/// ```
/// use roster_engine::models::{DateRange, Staff};
/// use roster_engine::payroll::compute_staff_hours;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let john = Staff {
///     id: "staff_1".to_string(),
///     name: "John Smith".to_string(),
///     email: "john@example.com".to_string(),
///     phone: String::new(),
///     position: "Bartender".to_string(),
///     hourly_rate: Decimal::new(1050, 2), // 10.50
///     is_active: true,
///     notes: None,
/// };
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
/// );
///
/// let hours = compute_staff_hours(&john, &range, &[]);
/// assert_eq!(hours.total_hours, Decimal::ZERO);
/// assert_eq!(hours.total_pay, Decimal::ZERO);
/// ```
pub fn compute_staff_hours(staff: &Staff, range: &DateRange, shifts: &[Shift]) -> StaffHours {
    let matched: Vec<Shift> = shifts
        .iter()
        .filter(|s| s.staff_id == staff.id && range.contains(s.date))
        .cloned()
        .collect();

    let total_hours: Decimal = matched.iter().map(shift_hours).sum();
    let total_pay = total_hours * staff.hourly_rate;

    StaffHours {
        staff_id: staff.id.clone(),
        staff_name: staff.name.clone(),
        total_hours,
        total_pay,
        shifts: matched,
    }
}

/// Computes hours and pay for every staff member with shifts in the range.
///
/// Staff with zero matching shifts are excluded. Results are sorted by
/// staff name ascending (plain lexicographic compare).
pub fn compute_all_staff_hours(
    staff: &[Staff],
    range: &DateRange,
    shifts: &[Shift],
) -> Vec<StaffHours> {
    let mut results: Vec<StaffHours> = staff
        .iter()
        .map(|member| compute_staff_hours(member, range, shifts))
        .filter(|hours| !hours.shifts.is_empty())
        .collect();

    results.sort_by(|a, b| a.staff_name.cmp(&b.staff_name));
    results
}

/// Marks every currently-unpaid shift in the range as paid.
///
/// # Arguments
///
/// * `shifts` - The full shift collection, mutated in place.
/// * `scope` - All staff, or a single staff member.
/// * `range` - The inclusive date range to cover.
///
/// # Returns
///
/// How many shifts changed from unpaid to paid. Already-paid shifts are
/// untouched, which makes the operation idempotent.
pub fn mark_paid_shifts(shifts: &mut [Shift], scope: &PaidScope, range: &DateRange) -> usize {
    let mut changed = 0;
    for shift in shifts
        .iter_mut()
        .filter(|s| !s.is_paid && scope.matches(s) && range.contains(s.date))
    {
        shift.is_paid = true;
        changed += 1;
    }
    changed
}
