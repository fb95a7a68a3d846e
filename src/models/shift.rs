//! Shift model and its draft type.
//!
//! This module defines the Shift struct for representing planned work
//! assignments, and the ShiftDraft request type validated at the store
//! boundary.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};
use crate::models::wire;

/// Represents a planned work shift for one staff member on one date.
///
/// `end_time` may be numerically earlier than `start_time`, which denotes a
/// shift that crosses midnight and ends on the following calendar day. The
/// duration calculator compensates for the wrap; see
/// [`crate::calculation::shift_duration_hours`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The staff member the shift is assigned to.
    pub staff_id: String,
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// Wall-clock start time.
    #[serde(with = "wire::hhmm")]
    pub start_time: NaiveTime,
    /// Wall-clock end time. Earlier than `start_time` means the shift ends
    /// after midnight.
    #[serde(with = "wire::hhmm")]
    pub end_time: NaiveTime,
    /// The position worked during the shift (e.g., "Server").
    pub position: String,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Handover notes for the next shift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handover_notes: Option<String>,
    /// Whether this shift has been paid out.
    pub is_paid: bool,
}

impl Shift {
    /// Returns the day of the week for the shift's start date.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}

/// A shift as submitted by a caller, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDraft {
    /// The staff member the shift is assigned to. Required.
    pub staff_id: String,
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// Wall-clock start time.
    #[serde(with = "wire::hhmm")]
    pub start_time: NaiveTime,
    /// Wall-clock end time.
    #[serde(with = "wire::hhmm")]
    pub end_time: NaiveTime,
    /// The position worked during the shift.
    pub position: String,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Handover notes for the next shift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handover_notes: Option<String>,
    /// Whether the shift is created already paid. Usually `false`.
    #[serde(default)]
    pub is_paid: bool,
}

impl ShiftDraft {
    /// Validates the draft's required fields.
    ///
    /// Existence of the referenced staff member is deliberately not checked
    /// here: referential integrity is maintained by the store's cascade
    /// rules, not reject-on-insert. Only an empty identifier is rejected.
    pub fn validate(&self) -> RosterResult<()> {
        if self.staff_id.trim().is_empty() {
            return Err(RosterError::Validation {
                field: "staff_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Builds a [`Shift`] record from the draft with the given id.
    pub(crate) fn into_shift(self, id: String) -> Shift {
        Shift {
            id,
            staff_id: self.staff_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            position: self.position,
            notes: self.notes,
            handover_notes: self.handover_notes,
            is_paid: self.is_paid,
        }
    }
}
