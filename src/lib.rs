//! Staff Rostering and Payroll Engine
//!
//! This crate provides the core of a staff scheduling tool for a small
//! hospitality business: staff records, shift assignment, availability rules,
//! timesheets with clock-in/clock-out, and payroll computation, persisted as
//! per-collection snapshots to a durable key-value store.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod payroll;
pub mod store;
