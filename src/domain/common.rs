use chrono::NaiveDate;

/// Records anchored to a calendar date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}
