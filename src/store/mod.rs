//! The consistency store.
//!
//! [`RosterStore`] holds the five collections, enforces cascade-delete and
//! cross-collection synchronization, and persists every mutation as
//! whole-collection snapshots through an injected [`SnapshotStore`]. All
//! collaborators (storage, notifications, time source) arrive by
//! constructor injection; there is no ambient global state.

mod clock;
mod notify;
mod seed;
mod snapshot;

pub use clock::{Clock, FixedClock, SystemClock};
pub use notify::{Notice, NotificationSink, NullSink, RecordingSink, Severity, TracingSink};
pub use seed::{SeedData, seed_data};
pub use snapshot::{JsonFileStore, MemorySnapshotStore, SnapshotStore};

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::calculation;
use crate::error::{EntityKind, RosterError, RosterResult};
use crate::models::{
    Availability, AvailabilityDraft, DateRange, Shift, ShiftDraft, Staff, StaffDraft,
    TimesheetDraft, TimesheetEntry, User, UserRole,
};
use crate::payroll::{self, ExportOutcome, PaidScope};

const KEY_STAFF: &str = "staff";
const KEY_SHIFTS: &str = "shifts";
const KEY_AVAILABILITIES: &str = "availabilities";
const KEY_USERS: &str = "users";
const KEY_TIMESHEETS: &str = "timesheets";

/// Tunable store behavior.
#[derive(Debug, Clone)]
pub struct StorePolicy {
    /// Whether one staff member may hold several open (not clocked out)
    /// timesheet sessions at once. The original tool allowed this, which
    /// supports overlapping shifts; set to `false` to reject a clock-in
    /// while a session is already open.
    pub allow_concurrent_sessions: bool,
}

impl Default for StorePolicy {
    fn default() -> Self {
        Self {
            allow_concurrent_sessions: true,
        }
    }
}

/// The in-memory roster with its durable snapshot, notification sink, and
/// time source.
///
/// Every mutating method validates its input, applies the change and any
/// cascades in memory, persists each touched collection, and emits one
/// user-facing notification. Missing ids are reported as
/// [`RosterError::NotFound`] rather than silently ignored.
pub struct RosterStore {
    staff: Vec<Staff>,
    shifts: Vec<Shift>,
    availabilities: Vec<Availability>,
    users: Vec<User>,
    timesheets: Vec<TimesheetEntry>,
    snapshot: Box<dyn SnapshotStore>,
    sink: Box<dyn NotificationSink>,
    clock: Box<dyn Clock>,
    policy: StorePolicy,
}

impl RosterStore {
    /// Loads the roster from the snapshot store.
    ///
    /// Each collection is read independently; a collection that has never
    /// been persisted initializes from the built-in seed data. After
    /// loading, records orphaned by an interrupted cascade (a shift whose
    /// staff member no longer exists, a timesheet whose shift is gone) are
    /// pruned and the cleaned collections re-persisted.
    pub fn load(
        snapshot: Box<dyn SnapshotStore>,
        sink: Box<dyn NotificationSink>,
        clock: Box<dyn Clock>,
        policy: StorePolicy,
    ) -> RosterResult<Self> {
        let seed = seed_data(clock.now());

        let mut store = Self {
            staff: Vec::new(),
            shifts: Vec::new(),
            availabilities: Vec::new(),
            users: Vec::new(),
            timesheets: Vec::new(),
            snapshot,
            sink,
            clock,
            policy,
        };

        store.staff = store.load_collection(KEY_STAFF, seed.staff)?;
        store.shifts = store.load_collection(KEY_SHIFTS, seed.shifts)?;
        store.availabilities = store.load_collection(KEY_AVAILABILITIES, seed.availabilities)?;
        store.users = store.load_collection(KEY_USERS, seed.users)?;
        store.timesheets = store.load_collection(KEY_TIMESHEETS, seed.timesheets)?;

        store.prune_orphans()?;
        Ok(store)
    }

    fn load_collection<T: DeserializeOwned + Serialize>(
        &mut self,
        key: &str,
        seed: Vec<T>,
    ) -> RosterResult<Vec<T>> {
        match self.snapshot.get(key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| RosterError::Storage {
                key: key.to_string(),
                message: e.to_string(),
            }),
            None => {
                tracing::info!(collection = key, "no snapshot found, seeding");
                Self::persist_to(&mut *self.snapshot, key, &seed)?;
                Ok(seed)
            }
        }
    }

    /// Drops records whose owner no longer exists.
    ///
    /// Per-collection persistence means a crash mid-cascade can leave, for
    /// example, a shift referencing a deleted staff member. Orphans are
    /// detected here on every load and removed, and any collection that
    /// shrank is re-persisted.
    fn prune_orphans(&mut self) -> RosterResult<()> {
        let staff_ids: HashSet<String> = self.staff.iter().map(|s| s.id.clone()).collect();

        let shifts_before = self.shifts.len();
        self.shifts.retain(|s| staff_ids.contains(&s.staff_id));
        let shift_ids: HashSet<String> = self.shifts.iter().map(|s| s.id.clone()).collect();

        let avail_before = self.availabilities.len();
        self.availabilities
            .retain(|a| staff_ids.contains(&a.staff_id));

        let users_before = self.users.len();
        self.users.retain(|u| match &u.staff_id {
            Some(id) => staff_ids.contains(id),
            None => true, // the manager account has no staff record
        });

        let timesheets_before = self.timesheets.len();
        self.timesheets
            .retain(|t| staff_ids.contains(&t.staff_id) && shift_ids.contains(&t.shift_id));

        let pruned = [
            (KEY_SHIFTS, shifts_before - self.shifts.len()),
            (KEY_AVAILABILITIES, avail_before - self.availabilities.len()),
            (KEY_USERS, users_before - self.users.len()),
            (KEY_TIMESHEETS, timesheets_before - self.timesheets.len()),
        ];
        for (key, removed) in pruned {
            if removed > 0 {
                tracing::warn!(collection = key, removed, "pruned orphaned records");
            }
        }

        if pruned.iter().any(|(_, removed)| *removed > 0) {
            self.persist_shifts()?;
            self.persist_availabilities()?;
            self.persist_users()?;
            self.persist_timesheets()?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// All staff records.
    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    /// All shifts.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// All availability rules.
    pub fn availabilities(&self) -> &[Availability] {
        &self.availabilities
    }

    /// All user accounts.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All timesheet entries.
    pub fn timesheets(&self) -> &[TimesheetEntry] {
        &self.timesheets
    }

    /// Looks up a staff member by id.
    pub fn staff_by_id(&self, id: &str) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == id)
    }

    /// Evaluates a proposed shift window against the staff member's
    /// declared availability rules. Advisory only; never blocks a mutation.
    pub fn check_availability(
        &self,
        staff_id: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> bool {
        calculation::is_available(staff_id, date, start, end, &self.availabilities)
    }

    /// Builds the payroll CSV export for a date range.
    pub fn export_payroll(&self, range: &DateRange) -> ExportOutcome {
        let rows = payroll::export_rows(&self.staff, &self.shifts, range);
        let outcome = payroll::build_csv(&rows, range);
        match &outcome {
            ExportOutcome::Document(doc) => self.sink.notify(
                "Payroll exported",
                &format!("Payroll written to {}", doc.filename),
                Severity::Success,
            ),
            ExportOutcome::NothingToExport => self.sink.notify(
                "Nothing to export",
                "No shifts fall within the selected date range",
                Severity::Info,
            ),
        }
        outcome
    }

    // ------------------------------------------------------------------
    // Staff
    // ------------------------------------------------------------------

    /// Adds a staff member and auto-creates their linked user account.
    pub fn add_staff(&mut self, draft: StaffDraft) -> RosterResult<Staff> {
        draft.validate()?;
        let staff = draft.into_staff(Self::new_id());

        self.users.push(User {
            id: Self::new_id(),
            staff_id: Some(staff.id.clone()),
            email: staff.email.clone(),
            role: UserRole::Staff,
            last_login: None,
        });
        self.staff.push(staff.clone());

        self.persist_staff()?;
        self.persist_users()?;
        self.sink.notify(
            "Staff added",
            &format!("{} has been added to the roster", staff.name),
            Severity::Success,
        );
        Ok(staff)
    }

    /// Replaces a staff record by id, propagating an email change to the
    /// linked user account.
    pub fn update_staff(&mut self, staff: Staff) -> RosterResult<()> {
        let existing = self
            .staff
            .iter_mut()
            .find(|s| s.id == staff.id)
            .ok_or_else(|| RosterError::NotFound {
                entity: EntityKind::Staff,
                id: staff.id.clone(),
            })?;

        let email_changed = existing.email != staff.email;
        let name = staff.name.clone();
        *existing = staff.clone();

        if email_changed {
            for user in self
                .users
                .iter_mut()
                .filter(|u| u.staff_id.as_deref() == Some(staff.id.as_str()))
            {
                user.email = staff.email.clone();
            }
            self.persist_users()?;
        }

        self.persist_staff()?;
        self.sink.notify(
            "Staff updated",
            &format!("{name}'s details have been updated"),
            Severity::Success,
        );
        Ok(())
    }

    /// Deletes a staff member and cascades to their shifts, availability
    /// rules, timesheets, and user account.
    ///
    /// The cascade is applied entirely in memory before any collection is
    /// persisted, so the writes happen back-to-back as one logical
    /// transaction; a crash between them is repaired by orphan pruning on
    /// the next load.
    pub fn delete_staff(&mut self, id: &str) -> RosterResult<()> {
        let position = self
            .staff
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| RosterError::NotFound {
                entity: EntityKind::Staff,
                id: id.to_string(),
            })?;
        let removed = self.staff.remove(position);

        self.shifts.retain(|s| s.staff_id != id);
        let shift_ids: HashSet<String> = self.shifts.iter().map(|s| s.id.clone()).collect();
        self.availabilities.retain(|a| a.staff_id != id);
        self.timesheets
            .retain(|t| t.staff_id != id && shift_ids.contains(&t.shift_id));
        self.users.retain(|u| u.staff_id.as_deref() != Some(id));

        self.persist_staff()?;
        self.persist_shifts()?;
        self.persist_availabilities()?;
        self.persist_timesheets()?;
        self.persist_users()?;
        self.sink.notify(
            "Staff deleted",
            &format!("{} and all their records have been removed", removed.name),
            Severity::Success,
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Shifts
    // ------------------------------------------------------------------

    /// Adds a shift.
    pub fn add_shift(&mut self, draft: ShiftDraft) -> RosterResult<Shift> {
        draft.validate()?;
        let shift = draft.into_shift(Self::new_id());
        self.shifts.push(shift.clone());

        self.persist_shifts()?;
        self.sink.notify(
            "Shift added",
            &format!("Shift on {} has been added", shift.date),
            Severity::Success,
        );
        Ok(shift)
    }

    /// Replaces a shift by id.
    pub fn update_shift(&mut self, shift: Shift) -> RosterResult<()> {
        let existing = self
            .shifts
            .iter_mut()
            .find(|s| s.id == shift.id)
            .ok_or_else(|| RosterError::NotFound {
                entity: EntityKind::Shift,
                id: shift.id.clone(),
            })?;
        *existing = shift;

        self.persist_shifts()?;
        self.sink
            .notify("Shift updated", "The shift has been updated", Severity::Success);
        Ok(())
    }

    /// Deletes a shift, cascading to timesheet entries that reference it.
    pub fn delete_shift(&mut self, id: &str) -> RosterResult<()> {
        let position = self
            .shifts
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| RosterError::NotFound {
                entity: EntityKind::Shift,
                id: id.to_string(),
            })?;
        self.shifts.remove(position);
        self.timesheets.retain(|t| t.shift_id != id);

        self.persist_shifts()?;
        self.persist_timesheets()?;
        self.sink
            .notify("Shift deleted", "The shift has been removed", Severity::Success);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Availability
    // ------------------------------------------------------------------

    /// Adds an availability rule.
    pub fn add_availability(&mut self, draft: AvailabilityDraft) -> RosterResult<Availability> {
        draft.validate()?;
        let rule = draft.into_availability(Self::new_id());
        self.availabilities.push(rule.clone());

        self.persist_availabilities()?;
        self.sink.notify(
            "Availability added",
            "The availability rule has been saved",
            Severity::Success,
        );
        Ok(rule)
    }

    /// Replaces an availability rule by id.
    pub fn update_availability(&mut self, rule: Availability) -> RosterResult<()> {
        let existing = self
            .availabilities
            .iter_mut()
            .find(|a| a.id == rule.id)
            .ok_or_else(|| RosterError::NotFound {
                entity: EntityKind::Availability,
                id: rule.id.clone(),
            })?;
        *existing = rule;

        self.persist_availabilities()?;
        self.sink.notify(
            "Availability updated",
            "The availability rule has been updated",
            Severity::Success,
        );
        Ok(())
    }

    /// Deletes an availability rule. Leaf entity; no cascades.
    pub fn delete_availability(&mut self, id: &str) -> RosterResult<()> {
        let position = self
            .availabilities
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| RosterError::NotFound {
                entity: EntityKind::Availability,
                id: id.to_string(),
            })?;
        self.availabilities.remove(position);

        self.persist_availabilities()?;
        self.sink.notify(
            "Availability deleted",
            "The availability rule has been removed",
            Severity::Success,
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Timesheets
    // ------------------------------------------------------------------

    /// Adds a manually-entered timesheet.
    pub fn add_timesheet(&mut self, draft: TimesheetDraft) -> RosterResult<TimesheetEntry> {
        draft.validate()?;
        let entry = draft.into_entry(Self::new_id());
        self.timesheets.push(entry.clone());

        self.persist_timesheets()?;
        self.sink.notify(
            "Timesheet added",
            "The timesheet entry has been recorded",
            Severity::Success,
        );
        Ok(entry)
    }

    /// Replaces a timesheet entry by id.
    pub fn update_timesheet(&mut self, entry: TimesheetEntry) -> RosterResult<()> {
        let existing = self
            .timesheets
            .iter_mut()
            .find(|t| t.id == entry.id)
            .ok_or_else(|| RosterError::NotFound {
                entity: EntityKind::Timesheet,
                id: entry.id.clone(),
            })?;
        *existing = entry;

        self.persist_timesheets()?;
        self.sink.notify(
            "Timesheet updated",
            "The timesheet entry has been updated",
            Severity::Success,
        );
        Ok(())
    }

    /// Deletes a timesheet entry. Leaf entity; no cascades.
    pub fn delete_timesheet(&mut self, id: &str) -> RosterResult<()> {
        let position = self
            .timesheets
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| RosterError::NotFound {
                entity: EntityKind::Timesheet,
                id: id.to_string(),
            })?;
        self.timesheets.remove(position);

        self.persist_timesheets()?;
        self.sink.notify(
            "Timesheet deleted",
            "The timesheet entry has been removed",
            Severity::Success,
        );
        Ok(())
    }

    /// Opens a work session: creates a timesheet entry clocked in now.
    ///
    /// With [`StorePolicy::allow_concurrent_sessions`] disabled, a staff
    /// member with an open session cannot clock in again.
    pub fn clock_in(&mut self, staff_id: &str, shift_id: &str) -> RosterResult<TimesheetEntry> {
        if staff_id.trim().is_empty() {
            return Err(RosterError::Validation {
                field: "staff_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if shift_id.trim().is_empty() {
            return Err(RosterError::Validation {
                field: "shift_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !self.policy.allow_concurrent_sessions
            && self
                .timesheets
                .iter()
                .any(|t| t.staff_id == staff_id && t.is_active())
        {
            return Err(RosterError::Validation {
                field: "staff_id".to_string(),
                message: "staff member already has an open session".to_string(),
            });
        }

        let entry = TimesheetEntry {
            id: Self::new_id(),
            staff_id: staff_id.to_string(),
            shift_id: shift_id.to_string(),
            clock_in_time: self.clock.now(),
            clock_out_time: None,
            manually_entered: false,
            notes: None,
        };
        self.timesheets.push(entry.clone());

        self.persist_timesheets()?;
        self.sink
            .notify("Clocked in", "The session has been opened", Severity::Success);
        Ok(entry)
    }

    /// Closes a work session: stamps the entry's clock-out time with now.
    pub fn clock_out(&mut self, timesheet_id: &str) -> RosterResult<()> {
        let now = self.clock.now();
        let entry = self
            .timesheets
            .iter_mut()
            .find(|t| t.id == timesheet_id)
            .ok_or_else(|| RosterError::NotFound {
                entity: EntityKind::Timesheet,
                id: timesheet_id.to_string(),
            })?;
        entry.clock_out_time = Some(now);

        self.persist_timesheets()?;
        self.sink
            .notify("Clocked out", "The session has been closed", Severity::Success);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Payroll
    // ------------------------------------------------------------------

    /// Marks every unpaid shift in the range as paid.
    ///
    /// Idempotent: already-paid shifts are untouched and a repeat call
    /// changes nothing. Returns how many shifts were flipped.
    pub fn mark_paid(&mut self, scope: &PaidScope, range: &DateRange) -> RosterResult<usize> {
        let changed = payroll::mark_paid_shifts(&mut self.shifts, scope, range);
        if changed > 0 {
            self.persist_shifts()?;
        }
        self.sink.notify(
            "Marked as paid",
            &format!("{changed} shift(s) marked as paid"),
            Severity::Success,
        );
        Ok(changed)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    fn persist_to<T: Serialize>(
        snapshot: &mut dyn SnapshotStore,
        key: &str,
        items: &[T],
    ) -> RosterResult<()> {
        let raw = serde_json::to_string(items).map_err(|e| RosterError::Storage {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        snapshot.set(key, &raw)?;
        tracing::debug!(collection = key, count = items.len(), "persisted snapshot");
        Ok(())
    }

    fn persist_staff(&mut self) -> RosterResult<()> {
        Self::persist_to(&mut *self.snapshot, KEY_STAFF, &self.staff)
    }

    fn persist_shifts(&mut self) -> RosterResult<()> {
        Self::persist_to(&mut *self.snapshot, KEY_SHIFTS, &self.shifts)
    }

    fn persist_availabilities(&mut self) -> RosterResult<()> {
        Self::persist_to(&mut *self.snapshot, KEY_AVAILABILITIES, &self.availabilities)
    }

    fn persist_users(&mut self) -> RosterResult<()> {
        Self::persist_to(&mut *self.snapshot, KEY_USERS, &self.users)
    }

    fn persist_timesheets(&mut self) -> RosterResult<()> {
        Self::persist_to(&mut *self.snapshot, KEY_TIMESHEETS, &self.timesheets)
    }
}
