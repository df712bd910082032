//! Wall-clock access for the strategies whose choices depend on the time.
//!
//! Going through a trait keeps those strategies testable: tests pin the time
//! with [`FixedClock`] while real runs use [`SystemClock`].

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

pub trait Clock: Send {
    fn now(&self) -> NaiveDateTime;

    fn hour(&self) -> u32 {
        self.now().hour()
    }

    fn minute(&self) -> u32 {
        self.now().minute()
    }

    fn second(&self) -> u32 {
        self.now().second()
    }

    /// Day of the week, Monday = 0 through Sunday = 6.
    fn weekday(&self) -> u32 {
        self.now().weekday().num_days_from_monday()
    }
}

/// Local time of the machine running the tournament.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
