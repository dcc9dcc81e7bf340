//! Calendar arithmetic for birth-chart calculations.
//!
//! This crate provides:
//! - Leap-year and month-length rules of the proleptic Gregorian calendar
//! - Integer day numbers for exact day differences between civil dates
//! - `CivilDate`, a validated year-month-day triple, and hour validation
//!
//! No time zones, leap seconds, or Julian-calendar dates are modelled.

pub mod calendar;
pub mod civil_date;
pub mod error;

pub use calendar::{
    DAY_NUMBER_EPOCH_1900, day_number, days_between, days_in_month, is_leap_year, validate_date,
    validate_hour,
};
pub use civil_date::CivilDate;
pub use error::CalendarError;
