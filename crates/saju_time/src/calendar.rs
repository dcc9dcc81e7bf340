//! Proleptic Gregorian day arithmetic.
//!
//! Day numbers follow the Fliegel & Van Flandern integer form of the
//! Julian Day Number, computed with Euclidean division so that years before
//! the common era still produce exact differences.

use crate::error::CalendarError;

/// Day number of 1900-01-01, the reference day of the day-pillar cycle.
pub const DAY_NUMBER_EPOCH_1900: i64 = 2_415_021;

/// True when `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return Err(CalendarError::MonthOutOfRange(month)),
    };
    Ok(days)
}

/// Reject months outside 1..=12 and days that do not exist in that month.
pub fn validate_date(year: i32, month: u32, day: u32) -> Result<(), CalendarError> {
    let last = days_in_month(year, month)?;
    if day == 0 || day > last {
        return Err(CalendarError::DayOutOfRange { year, month, day });
    }
    Ok(())
}

/// Reject hours outside 0..=23.
pub fn validate_hour(hour: u32) -> Result<u32, CalendarError> {
    if hour > 23 {
        return Err(CalendarError::HourOutOfRange(hour));
    }
    Ok(hour)
}

/// Integer Julian Day Number of a civil date (noon-based, no fraction).
///
/// The date must already be valid; use [`validate_date`] first or go
/// through [`crate::CivilDate`].
pub fn day_number(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;

    let a = (14 - m).div_euclid(12);
    let yy = y + 4800 - a;
    let mm = m + 12 * a - 3;

    d + (153 * mm + 2).div_euclid(5) + 365 * yy + yy.div_euclid(4) - yy.div_euclid(100)
        + yy.div_euclid(400)
        - 32_045
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: (i32, u32, u32), to: (i32, u32, u32)) -> i64 {
    day_number(to.0, to.1, to.2) - day_number(from.0, from.1, from.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rules() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
    }

    #[test]
    fn month_thirteen_rejected() {
        assert_eq!(
            days_in_month(2024, 13),
            Err(CalendarError::MonthOutOfRange(13))
        );
        assert_eq!(validate_date(2024, 0, 1), Err(CalendarError::MonthOutOfRange(0)));
    }

    #[test]
    fn february_thirtieth_rejected() {
        assert_eq!(
            validate_date(2024, 2, 30),
            Err(CalendarError::DayOutOfRange {
                year: 2024,
                month: 2,
                day: 30
            })
        );
        assert!(validate_date(2023, 2, 29).is_err());
        assert!(validate_date(2024, 2, 29).is_ok());
        assert!(validate_date(2024, 4, 0).is_err());
    }

    #[test]
    fn hour_bounds() {
        assert_eq!(validate_hour(0), Ok(0));
        assert_eq!(validate_hour(23), Ok(23));
        assert_eq!(validate_hour(24), Err(CalendarError::HourOutOfRange(24)));
    }

    #[test]
    fn epoch_day_number() {
        assert_eq!(day_number(1900, 1, 1), DAY_NUMBER_EPOCH_1900);
        // J2000.0 falls on 2000-01-01 (JD 2451545.0 at noon)
        assert_eq!(day_number(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn known_differences() {
        assert_eq!(days_between((1900, 1, 1), (1984, 2, 4)), 30_714);
        assert_eq!(days_between((1900, 1, 1), (1900, 3, 1)), 59);
        assert_eq!(days_between((1900, 1, 1), (1899, 12, 31)), -1);
        assert_eq!(days_between((1900, 1, 1), (2024, 2, 29)), 45_349);
    }

    #[test]
    fn consecutive_days_across_year_end() {
        assert_eq!(day_number(2024, 1, 1) - day_number(2023, 12, 31), 1);
        assert_eq!(day_number(2024, 3, 1) - day_number(2024, 2, 29), 1);
    }
}
