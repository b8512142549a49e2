use chrono::{Local, NaiveDateTime};

/// Source of "now" for the controller, so tests can pin instants.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local time zone.
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
