use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("start date {start} is after end date {end}")]
    ReversedRange { start: NaiveDate, end: NaiveDate },
}
