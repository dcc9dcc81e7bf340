//! Error types for chart calculations.

use saju_time::{CalendarError, CivilDate};
use thiserror::Error;

use crate::element::{Element, Season};

/// Errors from the chart engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Month, day, or hour outside its range, or a date that does not exist.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] CalendarError),
    /// Every element weight is zero; unreachable for a chart of four pillars.
    #[error("five-element profile has no weight")]
    DegenerateProfile,
    /// The yongsin/gisin table has no row for this combination.
    #[error("no yongsin/gisin rule for {element:?} day master in {season:?}")]
    UnmappedRule { element: Element, season: Season },
    /// A yongsin/gisin row names the same element twice.
    #[error("yongsin equals gisin for {element:?} day master in {season:?}")]
    InvalidRule { element: Element, season: Season },
    /// No luck cycle covers this age.
    #[error("no luck cycle covers age {age}")]
    NotFound { age: u32 },
    /// No solar term on record precedes the date.
    #[error("no solar term governs {0}")]
    NoGoverningTerm(CivilDate),
    /// The as-of year is before the birth year.
    #[error("as-of year {as_of_year} is before birth year {birth_year}")]
    AgeBeforeBirth { birth_year: i32, as_of_year: i32 },
    /// A forecast year or age falls outside the `i32` range.
    #[error("forecast {offset} years after {as_of_year} is out of range")]
    ForecastOutOfRange { as_of_year: i32, offset: u32 },
}
