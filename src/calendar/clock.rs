use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current date so metrics remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the reference date used as "today".
    fn today(&self) -> NaiveDate;
}

/// Reads the host's local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
