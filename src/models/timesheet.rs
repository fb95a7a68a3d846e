//! Timesheet entry model and its draft type.
//!
//! A timesheet entry records an actual worked session tied to a planned
//! shift, as opposed to the shift itself which is only the plan.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// Represents an actual recorded work session for one shift.
///
/// An entry with no `clock_out_time` is an active session: the staff member
/// is currently clocked in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The staff member who worked the session.
    pub staff_id: String,
    /// The planned shift the session belongs to.
    pub shift_id: String,
    /// When the staff member clocked in.
    pub clock_in_time: NaiveDateTime,
    /// When the staff member clocked out. `None` while the session is
    /// still active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out_time: Option<NaiveDateTime>,
    /// Whether the entry was keyed in by a manager rather than recorded by
    /// the clock-in flow.
    pub manually_entered: bool,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TimesheetEntry {
    /// Returns `true` while the session has no clock-out time.
    pub fn is_active(&self) -> bool {
        self.clock_out_time.is_none()
    }
}

/// A manually-entered timesheet as submitted by a caller.
///
/// The clock-in flow does not go through a draft; this type is the
/// manager's manual-entry path, so `manually_entered` is implied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetDraft {
    /// The staff member who worked the session. Required.
    pub staff_id: String,
    /// The planned shift the session belongs to. Required.
    pub shift_id: String,
    /// When the staff member clocked in.
    pub clock_in_time: NaiveDateTime,
    /// When the staff member clocked out, if the session is complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out_time: Option<NaiveDateTime>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TimesheetDraft {
    /// Validates the draft's identifiers.
    pub fn validate(&self) -> RosterResult<()> {
        if self.staff_id.trim().is_empty() {
            return Err(RosterError::Validation {
                field: "staff_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.shift_id.trim().is_empty() {
            return Err(RosterError::Validation {
                field: "shift_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Builds a [`TimesheetEntry`] from the draft with the given id.
    pub(crate) fn into_entry(self, id: String) -> TimesheetEntry {
        TimesheetEntry {
            id,
            staff_id: self.staff_id,
            shift_id: self.shift_id,
            clock_in_time: self.clock_in_time,
            clock_out_time: self.clock_out_time,
            manually_entered: true,
            notes: self.notes,
        }
    }
}
