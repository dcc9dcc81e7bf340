//! Daeun (대운): ten 10-year luck cycles stepped from the month pillar.
//!
//! Direction comes from gender and the year stem's polarity. Cycle `i`
//! covers ages `10i..=10i+9` and takes the month pillar shifted `i` steps
//! forward or backward through the 60-pair cycle.

use serde::{Deserialize, Serialize};

use crate::birth::Gender;
use crate::element::Polarity;
use crate::error::SajuError;
use crate::pillar::Pillar;
use crate::pillars::Chart;
use crate::stem::HeavenlyStem;
use crate::ten_gods::{TenGod, ten_god};

/// Number of cycles in a timeline.
pub const CYCLE_COUNT: usize = 10;

/// Years per cycle.
pub const CYCLE_YEARS: u32 = 10;

/// Order in which cycles step through the sexagenary sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }

    /// Korean name (순행, 역행).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Forward => "순행",
            Self::Backward => "역행",
        }
    }

    const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Forward for a yang-year male or a yin-year female, backward otherwise.
pub const fn daeun_direction(gender: Gender, year_stem_polarity: Polarity) -> Direction {
    match (gender, year_stem_polarity) {
        (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin) => Direction::Forward,
        _ => Direction::Backward,
    }
}

/// Inclusive age band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeRange {
    pub start: u32,
    pub end: u32,
}

impl AgeRange {
    pub const fn contains(&self, age: u32) -> bool {
        age >= self.start && age <= self.end
    }
}

/// One 10-year luck cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LuckCycle {
    pub age_range: AgeRange,
    pub pillar: Pillar,
    /// Relation of the cycle stem to the day master.
    pub ten_god: TenGod,
    pub direction: Direction,
}

/// Generate the ten cycles from the month pillar.
pub fn daeun_cycles(
    month_pillar: Pillar,
    day_master: HeavenlyStem,
    direction: Direction,
) -> [LuckCycle; CYCLE_COUNT] {
    std::array::from_fn(|i| {
        let step = direction.sign() * i as i64;
        let pillar = Pillar::new(
            month_pillar.stem.offset(step),
            month_pillar.branch.offset(step),
        );
        let start = i as u32 * CYCLE_YEARS;
        LuckCycle {
            age_range: AgeRange {
                start,
                end: start + CYCLE_YEARS - 1,
            },
            pillar,
            ten_god: ten_god(day_master, pillar.stem),
            direction,
        }
    })
}

/// Ordered luck cycles covering ages 0..=99.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckTimeline {
    pub direction: Direction,
    pub cycles: [LuckCycle; CYCLE_COUNT],
}

impl LuckTimeline {
    /// Cycle whose age range contains `age`.
    pub fn current(&self, age: u32) -> Result<&LuckCycle, SajuError> {
        self.cycles
            .iter()
            .find(|c| c.age_range.contains(age))
            .ok_or(SajuError::NotFound { age })
    }

    /// Cycle in effect during `as_of_year`, counting age as
    /// `as_of_year - birth_year`.
    pub fn current_for_year(
        &self,
        birth_year: i32,
        as_of_year: i32,
    ) -> Result<&LuckCycle, SajuError> {
        let age = i64::from(as_of_year) - i64::from(birth_year);
        if age < 0 {
            return Err(SajuError::AgeBeforeBirth {
                birth_year,
                as_of_year,
            });
        }
        let age = u32::try_from(age).unwrap_or(u32::MAX);
        self.current(age)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LuckCycle> {
        self.cycles.iter()
    }
}

/// Luck timeline for a chart and gender.
pub fn luck_timeline(chart: &Chart, gender: Gender) -> LuckTimeline {
    let direction = daeun_direction(gender, chart.year.stem.polarity());
    tracing::trace!(month = %chart.month, direction = direction.name(), "luck timeline");
    LuckTimeline {
        direction,
        cycles: daeun_cycles(chart.month, chart.day_master, direction),
    }
}
