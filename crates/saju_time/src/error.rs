//! Error types for calendar validation.

use thiserror::Error;

/// Errors from calendar validation or date parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Month outside 1..=12.
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u32),
    /// Day is zero or past the end of the month (covers 30 February etc.).
    #[error("day {day} does not exist in {year:04}-{month:02}")]
    DayOutOfRange { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23.
    #[error("hour {0} is outside 0..=23")]
    HourOutOfRange(u32),
    /// Text could not be read as `YYYY-MM-DD`.
    #[error("malformed date {0:?}, expected YYYY-MM-DD")]
    Malformed(String),
}
