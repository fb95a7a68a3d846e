//! Built-in seed data.
//!
//! When a collection has never been persisted, the store initializes it
//! from this sample roster: two staff members with shifts on the current
//! week's Monday, a few availability rules, matching user accounts plus the
//! manager account, and one completed timesheet.

use chrono::{Datelike, Days, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    Availability, RecurrenceType, Shift, Staff, TimesheetEntry, User, UserRole,
};

/// The full set of seed collections, generated together so cross-references
/// line up.
#[derive(Debug, Clone)]
pub struct SeedData {
    /// Sample staff members.
    pub staff: Vec<Staff>,
    /// Sample shifts for the current week.
    pub shifts: Vec<Shift>,
    /// Sample availability rules.
    pub availabilities: Vec<Availability>,
    /// User accounts: one per staff member plus the manager.
    pub users: Vec<User>,
    /// One completed timesheet for the first shift.
    pub timesheets: Vec<TimesheetEntry>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn hhmm(hour: u32, minute: u32) -> chrono::NaiveTime {
    // Statically in-range constants only.
    chrono::NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(chrono::NaiveTime::MIN)
}

/// Generates seed data anchored to the week containing `now`.
///
/// The sample shifts land on that week's Monday so a freshly-initialized
/// roster shows data in the default week view.
pub fn seed_data(now: NaiveDateTime) -> SeedData {
    let today = now.date();
    let monday = today - Days::new(u64::from(today.weekday().num_days_from_monday()));

    let john = Staff {
        id: new_id(),
        name: "John Smith".to_string(),
        email: "john@example.com".to_string(),
        phone: "07700 900123".to_string(),
        position: "Bartender".to_string(),
        hourly_rate: Decimal::new(1050, 2), // 10.50
        is_active: true,
        notes: Some("Experienced bartender".to_string()),
    };
    let sarah = Staff {
        id: new_id(),
        name: "Sarah Jones".to_string(),
        email: "sarah@example.com".to_string(),
        phone: "07700 900456".to_string(),
        position: "Server".to_string(),
        hourly_rate: Decimal::new(975, 2), // 9.75
        is_active: true,
        notes: Some("Student, available weekends only".to_string()),
    };

    let john_shift = Shift {
        id: new_id(),
        staff_id: john.id.clone(),
        date: monday,
        start_time: hhmm(12, 0),
        end_time: hhmm(20, 0),
        position: "Bartender".to_string(),
        notes: None,
        handover_notes: None,
        is_paid: false,
    };
    let sarah_shift = Shift {
        id: new_id(),
        staff_id: sarah.id.clone(),
        date: monday,
        start_time: hhmm(18, 0),
        end_time: hhmm(23, 0),
        position: "Server".to_string(),
        notes: None,
        handover_notes: None,
        is_paid: false,
    };

    let availabilities = vec![
        Availability {
            id: new_id(),
            staff_id: sarah.id.clone(),
            day_of_week: Weekday::Sat,
            start_time: hhmm(9, 0),
            end_time: hhmm(23, 0),
            is_available: true,
            recurrence_type: RecurrenceType::Weekly,
            date: None,
        },
        Availability {
            id: new_id(),
            staff_id: sarah.id.clone(),
            day_of_week: Weekday::Sun,
            start_time: hhmm(9, 0),
            end_time: hhmm(23, 0),
            is_available: true,
            recurrence_type: RecurrenceType::Weekly,
            date: None,
        },
        Availability {
            id: new_id(),
            staff_id: john.id.clone(),
            day_of_week: Weekday::Sun,
            start_time: hhmm(0, 0),
            end_time: hhmm(23, 59),
            is_available: false,
            recurrence_type: RecurrenceType::Weekly,
            date: None,
        },
    ];

    let users = vec![
        User {
            id: new_id(),
            staff_id: None,
            email: "manager@example.com".to_string(),
            role: UserRole::Manager,
            last_login: None,
        },
        User {
            id: new_id(),
            staff_id: Some(john.id.clone()),
            email: john.email.clone(),
            role: UserRole::Staff,
            last_login: None,
        },
        User {
            id: new_id(),
            staff_id: Some(sarah.id.clone()),
            email: sarah.email.clone(),
            role: UserRole::Staff,
            last_login: None,
        },
    ];

    let timesheets = vec![TimesheetEntry {
        id: new_id(),
        staff_id: john.id.clone(),
        shift_id: john_shift.id.clone(),
        clock_in_time: monday.and_time(hhmm(11, 58)),
        clock_out_time: Some(monday.and_time(hhmm(20, 5))),
        manually_entered: false,
        notes: None,
    }];

    SeedData {
        staff: vec![john, sarah],
        shifts: vec![john_shift, sarah_shift],
        availabilities,
        users,
        timesheets,
    }
}
