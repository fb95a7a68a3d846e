//! Payroll aggregation and export.
//!
//! This module computes hours and pay per staff member over a date range,
//! flips shifts to paid, and produces the CSV export document.

mod aggregator;
mod export;

pub use aggregator::{PaidScope, compute_all_staff_hours, compute_staff_hours, mark_paid_shifts};
pub use export::{CsvDocument, ExportOutcome, PayrollRow, build_csv, export_rows};
