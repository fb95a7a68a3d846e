//! CSV export of payroll data.
//!
//! Produces the downloadable payroll document: a fixed header row, one data
//! row per shift in range, numbers to two decimal places, currency values
//! prefixed with the pound sign, and dates in `DD/MM/YYYY` display format.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::calculation::shift_hours;
use crate::models::{DateRange, Shift, Staff};

/// The fixed CSV header row.
const HEADER: &str =
    "Staff Name,Position,Date,Start Time,End Time,Hours,Pay Rate,Total Pay,Paid Status,Notes";

/// One exportable payroll row: a shift joined with its staff member's name
/// and rate, plus the derived hours and pay.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollRow {
    /// The staff member's display name.
    pub staff_name: String,
    /// The position worked.
    pub position: String,
    /// The shift date.
    pub date: NaiveDate,
    /// Shift start time.
    pub start_time: NaiveTime,
    /// Shift end time.
    pub end_time: NaiveTime,
    /// Worked hours for the shift.
    pub hours: Decimal,
    /// The staff member's hourly rate.
    pub rate: Decimal,
    /// `hours` times `rate`.
    pub pay: Decimal,
    /// Whether the shift has been paid out.
    pub is_paid: bool,
    /// Shift notes, empty when none.
    pub notes: String,
}

/// A rendered CSV document ready to hand to the presentation layer for
/// download.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvDocument {
    /// Suggested download filename, `payroll_<start>_to_<end>.csv`.
    pub filename: String,
    /// The document body including the header row.
    pub content: String,
}

/// The outcome of building an export.
///
/// An empty date range is a reported condition, not an error: the caller
/// surfaces "nothing to export" rather than writing a header-only file.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// A non-empty document was produced.
    Document(CsvDocument),
    /// No shifts matched the range; nothing to export.
    NothingToExport,
}

/// Builds export rows for every shift in the range.
///
/// Rows follow the underlying shift iteration order (insertion order), not
/// any sort. Shifts whose staff member cannot be resolved are skipped; the
/// store prunes such orphans at load time.
pub fn export_rows(staff: &[Staff], shifts: &[Shift], range: &DateRange) -> Vec<PayrollRow> {
    shifts
        .iter()
        .filter(|shift| range.contains(shift.date))
        .filter_map(|shift| {
            let member = staff.iter().find(|s| s.id == shift.staff_id)?;
            let hours = shift_hours(shift);
            Some(PayrollRow {
                staff_name: member.name.clone(),
                position: shift.position.clone(),
                date: shift.date,
                start_time: shift.start_time,
                end_time: shift.end_time,
                hours,
                rate: member.hourly_rate,
                pay: hours * member.hourly_rate,
                is_paid: shift.is_paid,
                notes: shift.notes.clone().unwrap_or_default(),
            })
        })
        .collect()
}

/// Renders rows into a CSV document named for the range.
///
/// # Example
///
/// ```
/// use roster_engine::models::DateRange;
/// use roster_engine::payroll::{ExportOutcome, build_csv};
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
/// );
/// assert_eq!(build_csv(&[], &range), ExportOutcome::NothingToExport);
/// ```
pub fn build_csv(rows: &[PayrollRow], range: &DateRange) -> ExportOutcome {
    if rows.is_empty() {
        return ExportOutcome::NothingToExport;
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(HEADER.to_string());

    for row in rows {
        let fields = [
            csv_field(&row.staff_name),
            csv_field(&row.position),
            row.date.format("%d/%m/%Y").to_string(),
            row.start_time.format("%H:%M").to_string(),
            row.end_time.format("%H:%M").to_string(),
            format!("{:.2}", row.hours),
            format!("£{:.2}", row.rate),
            format!("£{:.2}", row.pay),
            if row.is_paid { "Paid" } else { "Unpaid" }.to_string(),
            csv_field(&row.notes),
        ];
        lines.push(fields.join(","));
    }

    ExportOutcome::Document(CsvDocument {
        filename: format!("payroll_{}_to_{}.csv", range.start, range.end),
        content: lines.join("\n"),
    })
}

/// Quotes a field when it contains the delimiter, a quote, or a newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
