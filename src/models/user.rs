//! User account model and roles.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The permission level of a user account.
///
/// Role gating is advisory: the presentation layer uses it to hide
/// manager-only actions, but the engine does not treat it as a security
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access: staff management, shift CRUD, marking paid, manual
    /// timesheet entry.
    Manager,
    /// Regular staff access.
    Staff,
}

impl UserRole {
    /// Returns `true` for the manager role.
    pub fn is_manager(&self) -> bool {
        matches!(self, UserRole::Manager)
    }
}

/// Represents a login account for the tool.
///
/// Every staff member gets a `staff`-role account created alongside their
/// record. One distinguished manager account exists with no linked staff
/// record (`staff_id` is `None`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the account.
    pub id: String,
    /// The linked staff record, or `None` for the manager account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
    /// Login email, kept in sync with the linked staff record's email.
    pub email: String,
    /// The account's permission level.
    pub role: UserRole,
    /// When the account last logged in, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<NaiveDateTime>,
}
