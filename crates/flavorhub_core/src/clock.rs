//! Calendar date source for date-dependent use cases.
//!
//! Services take a `Clock` instead of reading the system time directly, so
//! callers and tests can pin "today" to any date.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
///
/// Implementations return the date in whatever timezone the deployment
/// treats as authoritative; consumers do no timezone conversion.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Host-local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
