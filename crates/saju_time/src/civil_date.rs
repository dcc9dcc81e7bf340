//! Validated civil (calendar) date.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::{day_number, days_in_month, validate_date};
use crate::error::CalendarError;

/// A proleptic Gregorian date known to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Build a date, rejecting months outside 1..=12 and non-existent days.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        validate_date(year, month, day)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Integer Julian Day Number.
    pub fn day_number(&self) -> i64 {
        day_number(self.year, self.month, self.day)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &CivilDate) -> i64 {
        other.day_number() - self.day_number()
    }

    /// The date `days` days later (or earlier, when negative).
    pub fn add_days(&self, days: i64) -> Self {
        let mut year = self.year;
        let mut month = self.month;
        let mut remaining = days + self.day as i64;

        // Walk whole months; the date was valid so every days_in_month call succeeds.
        loop {
            let len = days_in_month(year, month).unwrap_or(31) as i64;
            if remaining > len {
                remaining -= len;
                (year, month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
            } else if remaining < 1 {
                (year, month) = if month == 1 { (year - 1, 12) } else { (year, month - 1) };
                remaining += days_in_month(year, month).unwrap_or(31) as i64;
            } else {
                break;
            }
        }

        Self {
            year,
            month,
            day: remaining as u32,
        }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = CalendarError;

    /// Parse `YYYY-MM-DD` (a leading `-` marks years before 1 CE).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CalendarError::Malformed(s.to_string());
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut parts = body.splitn(3, '-');
        let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let year = if negative { -year } else { year };
        Self::new(year, month, day)
    }
}
