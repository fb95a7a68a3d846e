//! Current date/time source.
//!
//! Clock-in, clock-out, and seed generation read "now" once per invocation
//! through this contract, so tests can pin time.

use chrono::{Local, NaiveDateTime};

/// A source of the current local wall-clock date and time.
pub trait Clock {
    /// Returns the current date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The system clock, in local time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(
    /// The instant every `now` call returns.
    pub NaiveDateTime,
);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
