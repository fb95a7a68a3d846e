//! Availability rule model and its draft type.
//!
//! An availability rule is a staff-declared statement of when they can or
//! cannot work: either a weekly-recurring rule for one day of the week, or
//! a one-time rule for a single date.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};
use crate::models::wire;

/// Whether an availability rule recurs weekly or applies to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecurrenceType {
    /// Applies every occurrence of the rule's day of week.
    Weekly,
    /// Applies only to the rule's `date`.
    OneTime,
}

/// Represents a single availability rule for one staff member.
///
/// Multiple rules may exist for the same staff member and day; the
/// evaluator in [`crate::calculation`] considers all of them, with blocking
/// rules taking priority. A rule with `is_available == false` declares a
/// window the staff member cannot work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Unique identifier for the rule.
    pub id: String,
    /// The staff member the rule belongs to.
    pub staff_id: String,
    /// Day of week the rule applies to (wire format: 0-6, 0 = Sunday).
    #[serde(with = "wire::weekday_sunday0")]
    pub day_of_week: Weekday,
    /// Start of the declared window.
    #[serde(with = "wire::hhmm")]
    pub start_time: NaiveTime,
    /// End of the declared window.
    #[serde(with = "wire::hhmm")]
    pub end_time: NaiveTime,
    /// `true` declares availability within the window; `false` declares the
    /// staff member unavailable.
    pub is_available: bool,
    /// Weekly-recurring or one-time.
    pub recurrence_type: RecurrenceType,
    /// The single date a one-time rule applies to. Present iff
    /// `recurrence_type` is [`RecurrenceType::OneTime`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// An availability rule as submitted by a caller, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityDraft {
    /// The staff member the rule belongs to. Required.
    pub staff_id: String,
    /// Day of week the rule applies to.
    #[serde(with = "wire::weekday_sunday0")]
    pub day_of_week: Weekday,
    /// Start of the declared window.
    #[serde(with = "wire::hhmm")]
    pub start_time: NaiveTime,
    /// End of the declared window.
    #[serde(with = "wire::hhmm")]
    pub end_time: NaiveTime,
    /// Available or blocking.
    pub is_available: bool,
    /// Weekly-recurring or one-time.
    pub recurrence_type: RecurrenceType,
    /// Required when `recurrence_type` is one-time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl AvailabilityDraft {
    /// Validates the draft.
    ///
    /// A one-time rule must carry a date; an empty staff id is rejected.
    pub fn validate(&self) -> RosterResult<()> {
        if self.staff_id.trim().is_empty() {
            return Err(RosterError::Validation {
                field: "staff_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.recurrence_type == RecurrenceType::OneTime && self.date.is_none() {
            return Err(RosterError::Validation {
                field: "date".to_string(),
                message: "one-time availability requires a date".to_string(),
            });
        }
        Ok(())
    }

    /// Builds an [`Availability`] record from the draft with the given id.
    pub(crate) fn into_availability(self, id: String) -> Availability {
        Availability {
            id,
            staff_id: self.staff_id,
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            is_available: self.is_available,
            recurrence_type: self.recurrence_type,
            date: self.date,
        }
    }
}
