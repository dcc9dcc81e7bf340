//! Period forecasts: a three-way rating per category for years ahead.
//!
//! The seed comes from the day master and the birth date. The reference year
//! is always supplied by the caller, so a forecast never reads the clock.

use serde::{Deserialize, Serialize};

use crate::birth::BirthInput;
use crate::error::SajuError;
use crate::stem::HeavenlyStem;

/// Years ahead of the as-of year forecast by default.
pub const DEFAULT_FORECAST_OFFSETS: [u32; 5] = [0, 1, 3, 5, 10];

/// Categories rated in a period, with their seed codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastCategory {
    Career,
    Wealth,
    Love,
    Health,
}

pub const ALL_FORECAST_CATEGORIES: [ForecastCategory; 4] = [
    ForecastCategory::Career,
    ForecastCategory::Wealth,
    ForecastCategory::Love,
    ForecastCategory::Health,
];

impl ForecastCategory {
    pub const fn code(self) -> u64 {
        match self {
            Self::Career => 1,
            Self::Wealth => 2,
            Self::Love => 3,
            Self::Health => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Wealth => "wealth",
            Self::Love => "love",
            Self::Health => "health",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodRating {
    Favorable,
    Steady,
    Caution,
}

impl PeriodRating {
    pub const fn from_value(v: u64) -> Self {
        match v % 3 {
            0 => Self::Favorable,
            1 => Self::Steady,
            _ => Self::Caution,
        }
    }

    /// 0 favorable, 1 steady, 2 caution.
    pub const fn value(self) -> u32 {
        match self {
            Self::Favorable => 0,
            Self::Steady => 1,
            Self::Caution => 2,
        }
    }

    /// Korean label (좋음, 보통, 주의).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Favorable => "좋음",
            Self::Steady => "보통",
            Self::Caution => "주의",
        }
    }
}

/// Overall tone of a period from the sum of its four ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    VeryFavorable,
    Stable,
    Cautious,
}

impl Outlook {
    pub const fn from_rating_sum(sum: u32) -> Self {
        if sum <= 4 {
            Self::VeryFavorable
        } else if sum <= 6 {
            Self::Stable
        } else {
            Self::Cautious
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::VeryFavorable => "very favorable",
            Self::Stable => "stable",
            Self::Cautious => "cautious",
        }
    }
}

/// Seed of a period forecast.
pub fn forecast_seed(day_master: HeavenlyStem, input: &BirthInput) -> i64 {
    i64::from(day_master.index()) * 100
        + i64::from(input.year())
        + i64::from(input.month())
        + i64::from(input.day())
}

/// Rating of one category `offset` years ahead.
pub fn period_rating(seed: i64, offset: u32, category: ForecastCategory) -> PeriodRating {
    let x = seed + i64::from(offset) * 10 + category.code() as i64;
    let v = (x * 9301 + 49297).rem_euclid(100);
    PeriodRating::from_value(v as u64)
}

/// Forecast for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodForecast {
    /// Years after the as-of year.
    pub offset: u32,
    pub year: i32,
    /// Korean-count age in that year (born at age 1).
    pub age: i32,
    pub career: PeriodRating,
    pub wealth: PeriodRating,
    pub love: PeriodRating,
    pub health: PeriodRating,
    pub outlook: Outlook,
}

impl PeriodForecast {
    pub const fn rating(&self, category: ForecastCategory) -> PeriodRating {
        match category {
            ForecastCategory::Career => self.career,
            ForecastCategory::Wealth => self.wealth,
            ForecastCategory::Love => self.love,
            ForecastCategory::Health => self.health,
        }
    }

    pub const fn rating_sum(&self) -> u32 {
        self.career.value() + self.wealth.value() + self.love.value() + self.health.value()
    }
}

/// Forecasts for each offset from `as_of_year`.
///
/// Fails with [`SajuError::AgeBeforeBirth`] when `as_of_year` precedes the
/// birth year, and with [`SajuError::ForecastOutOfRange`] when a forecast
/// year or age does not fit in an `i32`.
pub fn period_forecasts(
    day_master: HeavenlyStem,
    input: &BirthInput,
    as_of_year: i32,
    offsets: &[u32],
) -> Result<Vec<PeriodForecast>, SajuError> {
    if as_of_year < input.year() {
        return Err(SajuError::AgeBeforeBirth {
            birth_year: input.year(),
            as_of_year,
        });
    }
    let seed = forecast_seed(day_master, input);
    let age = i64::from(as_of_year) - i64::from(input.year()) + 1;

    offsets
        .iter()
        .map(|&offset| {
            let out_of_range = || SajuError::ForecastOutOfRange { as_of_year, offset };
            let year = i32::try_from(i64::from(as_of_year) + i64::from(offset))
                .map_err(|_| out_of_range())?;
            let age = i32::try_from(age + i64::from(offset)).map_err(|_| out_of_range())?;

            let rate = |c| period_rating(seed, offset, c);
            let (career, wealth, love, health) = (
                rate(ForecastCategory::Career),
                rate(ForecastCategory::Wealth),
                rate(ForecastCategory::Love),
                rate(ForecastCategory::Health),
            );
            let sum = career.value() + wealth.value() + love.value() + health.value();
            Ok(PeriodForecast {
                offset,
                year,
                age,
                career,
                wealth,
                love,
                health,
                outlook: Outlook::from_rating_sum(sum),
            })
        })
        .collect()
}
