//! Time sources for the session controller.
//!
//! The controller reads monotonic time for countdowns and the local calendar
//! date for stats keys. Tests drive both by hand with `ManualClock`.

#[cfg(test)]
use std::cell::Cell;
#[cfg(test)]
use std::rc::Rc;
#[cfg(test)]
use std::time::Duration;
use std::time::Instant;

use chrono::{Local, NaiveDate};

/// Source of the current instant and calendar date.
pub trait Clock {
    /// Current monotonic instant.
    fn now(&self) -> Instant;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can keep one handle
/// while the controller owns another.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
    today: Rc<Cell<NaiveDate>>,
}

#[cfg(test)]
impl ManualClock {
    /// Create a manual clock pinned to the given date.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
            today: Rc::new(Cell::new(today)),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Move time forward by a whole number of seconds.
    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }

    /// Change the calendar date.
    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}
