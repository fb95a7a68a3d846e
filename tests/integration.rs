//! Integration tests for the rostering engine.
//!
//! This suite drives the engine the way the presentation layer does:
//! load a store, mutate it, and render derived views from the current
//! snapshot. Scenarios cover:
//! - Duration calculation including overnight shifts
//! - Availability evaluation policies
//! - Cascade deletes and referential consistency
//! - Payroll aggregation, mark-paid, and CSV export
//! - Snapshot persistence, seeding, and orphan pruning

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rust_decimal::Decimal;

use roster_engine::calculation::{is_available, shift_duration_hours};
use roster_engine::error::{EntityKind, RosterError};
use roster_engine::models::{
    AvailabilityDraft, DateRange, RecurrenceType, ShiftDraft, Staff, StaffDraft,
};
use roster_engine::payroll::{
    ExportOutcome, PaidScope, build_csv, compute_all_staff_hours, export_rows,
};
use roster_engine::store::{
    FixedClock, MemorySnapshotStore, NullSink, RecordingSink, RosterStore, Severity, StorePolicy,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn fixed_now() -> NaiveDateTime {
    // Wednesday of the test week
    NaiveDateTime::parse_from_str("2024-06-05T10:00:00", "%Y-%m-%dT%H:%M:%S").unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn june_week() -> DateRange {
    DateRange::new(date("2024-06-03"), date("2024-06-09"))
}

/// A store whose snapshot starts with five empty collections, so no seed
/// data interferes with the scenario.
fn empty_store() -> RosterStore {
    let mut entries = HashMap::new();
    for key in ["staff", "shifts", "availabilities", "users", "timesheets"] {
        entries.insert(key.to_string(), "[]".to_string());
    }
    RosterStore::load(
        Box::new(MemorySnapshotStore::with_entries(entries)),
        Box::new(NullSink),
        Box::new(FixedClock(fixed_now())),
        StorePolicy::default(),
    )
    .expect("store should load")
}

fn staff_draft(name: &str, rate: Decimal) -> StaffDraft {
    StaffDraft {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "07700 900000".to_string(),
        position: "Server".to_string(),
        hourly_rate: rate,
        is_active: true,
        notes: None,
    }
}

fn shift_draft(staff_id: &str, day: &str, start: &str, end: &str) -> ShiftDraft {
    ShiftDraft {
        staff_id: staff_id.to_string(),
        date: date(day),
        start_time: time(start),
        end_time: time(end),
        position: "Server".to_string(),
        notes: None,
        handover_notes: None,
        is_paid: false,
    }
}

// =============================================================================
// Duration scenarios
// =============================================================================

#[test]
fn same_day_shift_is_plain_difference() {
    assert_eq!(
        shift_duration_hours(time("09:00"), time("17:00")),
        Decimal::new(80, 1)
    );
}

#[test]
fn overnight_shift_wraps_past_midnight() {
    // start 22:00, end 02:00 -> (24:00 - 22:00) + 02:00 = 4.0
    assert_eq!(
        shift_duration_hours(time("22:00"), time("02:00")),
        Decimal::new(40, 1)
    );
}

#[test]
fn equal_start_and_end_is_zero_hours() {
    assert_eq!(
        shift_duration_hours(time("09:00"), time("09:00")),
        Decimal::ZERO
    );
}

// =============================================================================
// Payroll scenarios
// =============================================================================

#[test]
fn john_at_ten_fifty_earns_84_for_an_8_hour_shift() {
    let mut store = empty_store();
    let john = store
        .add_staff(staff_draft("John", Decimal::new(1050, 2)))
        .unwrap();
    store
        .add_shift(shift_draft(&john.id, "2024-06-03", "12:00", "20:00"))
        .unwrap();

    let results = compute_all_staff_hours(store.staff(), &june_week(), store.shifts());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].total_hours, Decimal::new(80, 1)); // 8.0
    assert_eq!(results[0].total_pay, Decimal::new(8400, 2)); // 84.00
}

#[test]
fn overnight_shift_pays_three_hours_not_negative() {
    let mut store = empty_store();
    let john = store
        .add_staff(staff_draft("John", Decimal::new(10, 0)))
        .unwrap();
    store
        .add_shift(shift_draft(&john.id, "2024-06-07", "23:00", "02:00"))
        .unwrap();

    let results = compute_all_staff_hours(store.staff(), &june_week(), store.shifts());
    assert_eq!(results[0].total_hours, Decimal::new(30, 1)); // 3.0, not 21
}

#[test]
fn staff_without_shifts_in_range_are_excluded_and_rest_sorted() {
    let mut store = empty_store();
    let bob = store
        .add_staff(staff_draft("Bob", Decimal::new(10, 0)))
        .unwrap();
    let zara = store
        .add_staff(staff_draft("Zara", Decimal::new(11, 0)))
        .unwrap();
    store
        .add_staff(staff_draft("Amy", Decimal::new(12, 0)))
        .unwrap(); // no shifts

    store
        .add_shift(shift_draft(&zara.id, "2024-06-04", "09:00", "17:00"))
        .unwrap();
    store
        .add_shift(shift_draft(&bob.id, "2024-06-03", "12:00", "20:00"))
        .unwrap();

    let results = compute_all_staff_hours(store.staff(), &june_week(), store.shifts());
    let names: Vec<&str> = results.iter().map(|r| r.staff_name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Zara"]);
}

#[test]
fn mark_paid_twice_matches_marking_once() {
    let mut store = empty_store();
    let john = store
        .add_staff(staff_draft("John", Decimal::new(10, 0)))
        .unwrap();
    store
        .add_shift(shift_draft(&john.id, "2024-06-03", "12:00", "20:00"))
        .unwrap();
    store
        .add_shift(shift_draft(&john.id, "2024-06-04", "12:00", "20:00"))
        .unwrap();

    let first = store.mark_paid(&PaidScope::All, &june_week()).unwrap();
    let state_once: Vec<bool> = store.shifts().iter().map(|s| s.is_paid).collect();
    let second = store.mark_paid(&PaidScope::All, &june_week()).unwrap();
    let state_twice: Vec<bool> = store.shifts().iter().map(|s| s.is_paid).collect();

    assert_eq!(first, 2);
    assert_eq!(second, 0);
    assert_eq!(state_once, state_twice);
}

// =============================================================================
// Availability scenarios
// =============================================================================

#[test]
fn no_matching_rule_means_available() {
    // default-permit: absence of a rule is no restriction
    assert!(is_available(
        "staff_1",
        date("2024-06-03"),
        time("12:00"),
        time("20:00"),
        &[]
    ));
}

#[test]
fn blocking_rule_beats_permissive_rule_for_same_day() {
    let mut store = empty_store();
    let sarah = store
        .add_staff(staff_draft("Sarah", Decimal::new(975, 2)))
        .unwrap();

    store
        .add_availability(AvailabilityDraft {
            staff_id: sarah.id.clone(),
            day_of_week: Weekday::Mon,
            start_time: time("09:00"),
            end_time: time("23:00"),
            is_available: true,
            recurrence_type: RecurrenceType::Weekly,
            date: None,
        })
        .unwrap();
    store
        .add_availability(AvailabilityDraft {
            staff_id: sarah.id.clone(),
            day_of_week: Weekday::Mon,
            start_time: time("14:00"),
            end_time: time("16:00"),
            is_available: false,
            recurrence_type: RecurrenceType::Weekly,
            date: None,
        })
        .unwrap();

    // The permissive rule alone would allow this window.
    assert!(!store.check_availability(&sarah.id, date("2024-06-03"), time("12:00"), time("20:00")));
}

#[test]
fn one_time_rule_applies_to_its_date_only() {
    let mut store = empty_store();
    let sarah = store
        .add_staff(staff_draft("Sarah", Decimal::new(975, 2)))
        .unwrap();

    store
        .add_availability(AvailabilityDraft {
            staff_id: sarah.id.clone(),
            day_of_week: Weekday::Mon,
            start_time: time("00:00"),
            end_time: time("23:59"),
            is_available: false,
            recurrence_type: RecurrenceType::OneTime,
            date: Some(date("2024-06-03")),
        })
        .unwrap();

    assert!(!store.check_availability(&sarah.id, date("2024-06-03"), time("12:00"), time("20:00")));
    // The following Monday is unaffected.
    assert!(store.check_availability(&sarah.id, date("2024-06-10"), time("12:00"), time("20:00")));
}

// =============================================================================
// Consistency scenarios
// =============================================================================

#[test]
fn deleting_staff_leaves_no_orphaned_records() {
    let mut store = empty_store();
    let john = store
        .add_staff(staff_draft("John", Decimal::new(10, 0)))
        .unwrap();
    let keep = store
        .add_staff(staff_draft("Keep Me", Decimal::new(10, 0)))
        .unwrap();

    let shift = store
        .add_shift(shift_draft(&john.id, "2024-06-03", "12:00", "20:00"))
        .unwrap();
    store
        .add_shift(shift_draft(&keep.id, "2024-06-03", "09:00", "17:00"))
        .unwrap();
    store
        .add_availability(AvailabilityDraft {
            staff_id: john.id.clone(),
            day_of_week: Weekday::Mon,
            start_time: time("09:00"),
            end_time: time("17:00"),
            is_available: true,
            recurrence_type: RecurrenceType::Weekly,
            date: None,
        })
        .unwrap();
    store.clock_in(&john.id, &shift.id).unwrap();

    store.delete_staff(&john.id).unwrap();

    assert!(store.shifts().iter().all(|s| s.staff_id != john.id));
    assert!(store.availabilities().iter().all(|a| a.staff_id != john.id));
    assert!(store.timesheets().iter().all(|t| t.staff_id != john.id));
    assert!(
        store
            .users()
            .iter()
            .all(|u| u.staff_id.as_deref() != Some(john.id.as_str()))
    );
    // The other staff member's records survive.
    assert_eq!(store.staff().len(), 1);
    assert_eq!(store.shifts().len(), 1);
}

#[test]
fn clock_out_on_unknown_id_is_an_explicit_not_found() {
    let mut store = empty_store();
    let err = store.clock_out("never-existed").unwrap_err();
    assert!(matches!(
        err,
        RosterError::NotFound {
            entity: EntityKind::Timesheet,
            ..
        }
    ));
}

#[test]
fn state_survives_a_reload_through_the_same_snapshot() {
    let mut entries = HashMap::new();
    for key in ["staff", "shifts", "availabilities", "users", "timesheets"] {
        entries.insert(key.to_string(), "[]".to_string());
    }

    // First session: add a staff member and a shift, then capture the
    // snapshot contents the store persisted.
    let mut first = RosterStore::load(
        Box::new(MemorySnapshotStore::with_entries(entries)),
        Box::new(NullSink),
        Box::new(FixedClock(fixed_now())),
        StorePolicy::default(),
    )
    .unwrap();
    let john = first
        .add_staff(staff_draft("John", Decimal::new(1050, 2)))
        .unwrap();
    first
        .add_shift(shift_draft(&john.id, "2024-06-03", "12:00", "20:00"))
        .unwrap();

    let staff_json = serde_json::to_string(first.staff()).unwrap();
    let shifts_json = serde_json::to_string(first.shifts()).unwrap();
    let users_json = serde_json::to_string(first.users()).unwrap();

    // Second session: a fresh store over the persisted snapshot.
    let mut entries = HashMap::new();
    entries.insert("staff".to_string(), staff_json);
    entries.insert("shifts".to_string(), shifts_json);
    entries.insert("users".to_string(), users_json);
    entries.insert("availabilities".to_string(), "[]".to_string());
    entries.insert("timesheets".to_string(), "[]".to_string());

    let second = RosterStore::load(
        Box::new(MemorySnapshotStore::with_entries(entries)),
        Box::new(NullSink),
        Box::new(FixedClock(fixed_now())),
        StorePolicy::default(),
    )
    .unwrap();

    assert_eq!(second.staff().len(), 1);
    assert_eq!(second.staff()[0].name, "John");
    assert_eq!(second.shifts().len(), 1);
    assert_eq!(second.shifts()[0].start_time, time("12:00"));
}

#[test]
fn fresh_snapshot_initializes_from_seed_data() {
    let store = RosterStore::load(
        Box::new(MemorySnapshotStore::new()),
        Box::new(NullSink),
        Box::new(FixedClock(fixed_now())),
        StorePolicy::default(),
    )
    .unwrap();

    assert_eq!(store.staff().len(), 2);
    let names: Vec<&str> = store.staff().iter().map(|s| s.name.as_str()).collect();
    assert!(names.contains(&"John Smith"));
    assert!(names.contains(&"Sarah Jones"));

    // Seed references resolve: nothing gets pruned on load.
    assert_eq!(store.shifts().len(), 2);
    assert_eq!(store.timesheets().len(), 1);
    assert_eq!(store.users().len(), 3);
}

// =============================================================================
// Export scenarios
// =============================================================================

#[test]
fn export_over_empty_range_reports_nothing_to_export() {
    let store = empty_store();
    let outcome = store.export_payroll(&june_week());
    assert_eq!(outcome, ExportOutcome::NothingToExport);
}

#[test]
fn export_produces_named_document_with_header() {
    let mut store = empty_store();
    let john = store
        .add_staff(staff_draft("John Smith", Decimal::new(1050, 2)))
        .unwrap();
    store
        .add_shift(shift_draft(&john.id, "2024-06-03", "12:00", "20:00"))
        .unwrap();

    let ExportOutcome::Document(doc) = store.export_payroll(&june_week()) else {
        panic!("expected a document");
    };

    assert_eq!(doc.filename, "payroll_2024-06-03_to_2024-06-09.csv");
    let mut lines = doc.content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Staff Name,Position,Date,Start Time,End Time,Hours,Pay Rate,Total Pay,Paid Status,Notes"
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("John Smith,Server,03/06/2024,12:00,20:00,8.00,£10.50,£84.00,Unpaid"));
}

#[test]
fn export_rows_follow_shift_insertion_order() {
    let mut store = empty_store();
    let zara = store
        .add_staff(staff_draft("Zara", Decimal::new(10, 0)))
        .unwrap();
    let amy = store
        .add_staff(staff_draft("Amy", Decimal::new(10, 0)))
        .unwrap();
    store
        .add_shift(shift_draft(&zara.id, "2024-06-05", "12:00", "20:00"))
        .unwrap();
    store
        .add_shift(shift_draft(&amy.id, "2024-06-03", "09:00", "17:00"))
        .unwrap();

    let rows = export_rows(store.staff(), store.shifts(), &june_week());
    assert_eq!(rows[0].staff_name, "Zara");
    assert_eq!(rows[1].staff_name, "Amy");

    // build_csv preserves that order
    let ExportOutcome::Document(doc) = build_csv(&rows, &june_week()) else {
        panic!("expected a document");
    };
    let body: Vec<&str> = doc.content.lines().skip(1).collect();
    assert!(body[0].starts_with("Zara"));
    assert!(body[1].starts_with("Amy"));
}

// =============================================================================
// Notification scenarios
// =============================================================================

#[test]
fn mutations_and_exports_emit_notifications() {
    let sink = RecordingSink::new();
    let handle = sink.clone();
    let mut entries = HashMap::new();
    for key in ["staff", "shifts", "availabilities", "users", "timesheets"] {
        entries.insert(key.to_string(), "[]".to_string());
    }
    let mut store = RosterStore::load(
        Box::new(MemorySnapshotStore::with_entries(entries)),
        Box::new(sink),
        Box::new(FixedClock(fixed_now())),
        StorePolicy::default(),
    )
    .unwrap();

    let john = store
        .add_staff(staff_draft("John", Decimal::new(10, 0)))
        .unwrap();
    store
        .add_shift(shift_draft(&john.id, "2024-06-03", "12:00", "20:00"))
        .unwrap();
    store.export_payroll(&june_week());

    let notices = handle.notices();
    let titles: Vec<&str> = notices.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Staff added", "Shift added", "Payroll exported"]);
    assert!(notices.iter().all(|n| n.severity == Severity::Success));
}

// =============================================================================
// Validation scenarios
// =============================================================================

#[test]
fn empty_identifiers_are_rejected_not_stored() {
    let mut store = empty_store();

    assert!(store.add_shift(shift_draft("", "2024-06-03", "12:00", "20:00")).is_err());
    assert!(store.clock_in("", "shift_1").is_err());
    assert!(store.clock_in("staff_1", "").is_err());
    assert!(store.shifts().is_empty());
    assert!(store.timesheets().is_empty());
}

#[test]
fn negative_hourly_rate_is_rejected() {
    let mut store = empty_store();
    let err = store
        .add_staff(staff_draft("John", Decimal::new(-100, 2)))
        .unwrap_err();
    assert!(matches!(err, RosterError::Validation { .. }));
    assert!(store.staff().is_empty());
}

#[test]
fn updating_a_vanished_staff_member_reports_not_found() {
    let mut store = empty_store();
    let ghost = Staff {
        id: "ghost".to_string(),
        name: "Ghost".to_string(),
        email: "ghost@example.com".to_string(),
        phone: String::new(),
        position: "Server".to_string(),
        hourly_rate: Decimal::new(10, 0),
        is_active: true,
        notes: None,
    };
    let err = store.update_staff(ghost).unwrap_err();
    assert!(matches!(
        err,
        RosterError::NotFound {
            entity: EntityKind::Staff,
            ..
        }
    ));
}
