//! Staff model and its draft type.
//!
//! This module defines the Staff record and the StaffDraft request type
//! validated at the store boundary before a real record is constructed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// Represents a staff member employed by the business.
///
/// A staff member owns zero or more shifts, availability rules, and
/// timesheet entries, and is linked to at most one user account. Those
/// relationships are kept consistent by the store's cascade rules, not by
/// references inside this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Contact email address, mirrored onto the linked user account.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Job position (e.g., "Bartender").
    pub position: String,
    /// Hourly pay rate. Never negative.
    pub hourly_rate: Decimal,
    /// Whether the staff member is currently active on the roster.
    pub is_active: bool,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A staff record as submitted by a caller, before an id is assigned.
///
/// Drafts are validated once, at the store boundary, so the collections
/// never hold partially-formed records.
///
/// # Example
///
/// ```
/// use roster_engine::models::StaffDraft;
/// use rust_decimal::Decimal;
///
/// let draft = StaffDraft {
///     name: "John Smith".to_string(),
///     email: "john@example.com".to_string(),
///     phone: "07700 900123".to_string(),
///     position: "Bartender".to_string(),
///     hourly_rate: Decimal::new(1050, 2), // 10.50
///     is_active: true,
///     notes: None,
/// };
/// assert!(draft.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDraft {
    /// Full display name. Required.
    pub name: String,
    /// Contact email address. Required.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Job position.
    pub position: String,
    /// Hourly pay rate. Must not be negative.
    pub hourly_rate: Decimal,
    /// Whether the staff member starts out active.
    pub is_active: bool,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StaffDraft {
    /// Validates the draft's required fields.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the draft may be turned into a [`Staff`] record, or a
    /// [`RosterError::Validation`] naming the offending field.
    pub fn validate(&self) -> RosterResult<()> {
        if self.name.trim().is_empty() {
            return Err(RosterError::Validation {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.email.trim().is_empty() {
            return Err(RosterError::Validation {
                field: "email".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.hourly_rate.is_sign_negative() {
            return Err(RosterError::Validation {
                field: "hourly_rate".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Builds a [`Staff`] record from the draft with the given id.
    pub(crate) fn into_staff(self, id: String) -> Staff {
        Staff {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            position: self.position,
            hourly_rate: self.hourly_rate,
            is_active: self.is_active,
            notes: self.notes,
        }
    }
}
