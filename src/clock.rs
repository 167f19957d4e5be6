use chrono::{Local, NaiveDateTime};

/// Source of "now" for day-boundary and seasonal lookups.
///
/// Entry points read the clock once and pass the instant down, so a single
/// call never straddles midnight.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Host wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
