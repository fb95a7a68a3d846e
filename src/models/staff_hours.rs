//! Computed hours-and-pay result record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Shift;

/// Total hours and pay for one staff member over a date range.
///
/// Produced by the payroll aggregator; carries the matched shifts so the
/// presentation layer can render a per-shift breakdown without re-querying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffHours {
    /// The staff member the totals belong to.
    pub staff_id: String,
    /// The staff member's display name, denormalized for sorting and
    /// rendering.
    pub staff_name: String,
    /// Total worked hours across the matched shifts.
    pub total_hours: Decimal,
    /// Total pay: `total_hours` times the staff member's hourly rate.
    pub total_pay: Decimal,
    /// The shifts that contributed to the totals, in insertion order.
    pub shifts: Vec<Shift>,
}

impl StaffHours {
    /// Returns `true` when every contributing shift has been paid out.
    pub fn all_paid(&self) -> bool {
        self.shifts.iter().all(|s| s.is_paid)
    }
}
