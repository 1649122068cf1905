//! Source of "today" for newly created records.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;

/// Supplies the calendar date stamped on new records.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The clock handed to the user actor as its context.
pub type SharedClock = Arc<dyn Clock>;

/// Wall clock. Dates are taken in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock stuck on one day, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
