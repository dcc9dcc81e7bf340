//! Four-pillar derivation: year, month, day, and hour pillars.
//!
//! Every pillar is a modular offset from a fixed reference:
//! - Year: 1984 is 갑자, the first year of a 60-year cycle.
//! - Month: the stem follows the year stem ("five tigers" rule, folded into
//!   three additive buckets); the branch follows the effective month.
//! - Day: exact day count from 1900-01-01, taken as cycle position 0.
//! - Hour: twelve two-hour windows, the first spanning 23:00-00:59.
//!
//! Solar-term boundaries are approximated: a date before the 6th counts as
//! the previous month. No ephemeris is consulted.

use saju_time::{CivilDate, DAY_NUMBER_EPOCH_1900, validate_hour};
use serde::{Deserialize, Serialize};

use crate::birth::BirthInput;
use crate::branch::EarthlyBranch;
use crate::error::SajuError;
use crate::pillar::Pillar;
use crate::stem::HeavenlyStem;

/// Reference year of the 60-year cycle (갑자년).
pub const YEAR_EPOCH: i32 = 1984;

/// Days before this day-of-month belong to the previous month.
pub const MONTH_BOUNDARY_DAY: u32 = 6;

/// Branch for each two-hour window; window 0 is 23:00-00:59.
pub const HOUR_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Ja,
    EarthlyBranch::Chuk,
    EarthlyBranch::In,
    EarthlyBranch::Myo,
    EarthlyBranch::Jin,
    EarthlyBranch::Sa,
    EarthlyBranch::O,
    EarthlyBranch::Mi,
    EarthlyBranch::Sin,
    EarthlyBranch::Yu,
    EarthlyBranch::Sul,
    EarthlyBranch::Hae,
];

/// Hour stem index by day-stem group (`day_stem % 5`) and hour window.
pub const HOUR_STEMS: [[u8; 12]; 5] = [
    [0, 2, 4, 6, 8, 0, 2, 4, 6, 8, 0, 2], // 갑, 기
    [2, 4, 6, 8, 0, 2, 4, 6, 8, 0, 2, 4], // 을, 경
    [4, 6, 8, 0, 2, 4, 6, 8, 0, 2, 4, 6], // 병, 신
    [6, 8, 0, 2, 4, 6, 8, 0, 2, 4, 6, 8], // 정, 임
    [8, 0, 2, 4, 6, 8, 0, 2, 4, 6, 8, 0], // 무, 계
];

/// Position of a pillar within a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

/// Year pillar. Any year is valid, including years before the epoch.
pub fn year_pillar(year: i32) -> Pillar {
    let diff = year as i64 - YEAR_EPOCH as i64;
    Pillar::from_indices(diff, diff)
}

/// Month used for the month pillar: days before the 6th roll back one
/// month, and January rolls back to 12 without changing the year.
pub const fn effective_month(month: u32, day: u32) -> u32 {
    if day < MONTH_BOUNDARY_DAY {
        if month == 1 { 12 } else { month - 1 }
    } else {
        month
    }
}

/// Additive offset from the effective month to the month stem, chosen by
/// the year stem's residue mod 5.
const fn month_stem_offset(year_stem: HeavenlyStem) -> u32 {
    match year_stem.index() % 5 {
        0 | 1 => 1,
        2 | 3 => 3,
        _ => 5,
    }
}

/// Month pillar. Fails for months outside 1..=12 or non-existent days.
pub fn month_pillar(year: i32, month: u32, day: u32) -> Result<Pillar, SajuError> {
    let date = CivilDate::new(year, month, day)?;
    Ok(month_pillar_for(&date))
}

pub(crate) fn month_pillar_for(date: &CivilDate) -> Pillar {
    let adjusted = effective_month(date.month(), date.day());
    let year_stem = year_pillar(date.year()).stem;
    let stem = (adjusted + month_stem_offset(year_stem)) % 10;
    let branch = (adjusted + 1) % 12;
    Pillar::from_indices(stem as i64, branch as i64)
}

/// Day pillar from the exact day count since 1900-01-01.
pub fn day_pillar(year: i32, month: u32, day: u32) -> Result<Pillar, SajuError> {
    let date = CivilDate::new(year, month, day)?;
    Ok(day_pillar_for(&date))
}

pub(crate) fn day_pillar_for(date: &CivilDate) -> Pillar {
    let diff = date.day_number() - DAY_NUMBER_EPOCH_1900;
    Pillar::from_indices(diff, diff)
}

/// Two-hour window of a clock hour; 23 and 0 share window 0.
pub const fn hour_window(hour: u32) -> usize {
    (((hour + 1) / 2) % 12) as usize
}

/// Hour pillar for a day stem and clock hour (0..=23).
pub fn hour_pillar(day_stem: HeavenlyStem, hour: u32) -> Result<Pillar, SajuError> {
    let hour = validate_hour(hour)?;
    Ok(hour_pillar_unchecked(day_stem, hour))
}

fn hour_pillar_unchecked(day_stem: HeavenlyStem, hour: u32) -> Pillar {
    let window = hour_window(hour);
    let group = (day_stem.index() % 5) as usize;
    Pillar::new(
        HeavenlyStem::from_index(HOUR_STEMS[group][window] as i64),
        HOUR_BRANCHES[window],
    )
}

/// The four pillars of a birth moment. Immutable once built; any
/// recomputation produces a new chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Stem of the day pillar, the reference for every relation.
    pub day_master: HeavenlyStem,
}

impl Chart {
    /// Derive all four pillars from a validated birth input.
    pub fn from_birth(input: &BirthInput) -> Self {
        Self::derive(&input.date, input.hour)
    }

    /// Derive a chart from raw fields, validating each.
    pub fn compute(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, SajuError> {
        let date = CivilDate::new(year, month, day)?;
        let hour = validate_hour(hour)?;
        Ok(Self::derive(&date, hour))
    }

    fn derive(date: &CivilDate, hour: u32) -> Self {
        let year = year_pillar(date.year());
        let month = month_pillar_for(date);
        let day = day_pillar_for(date);
        let hour_p = hour_pillar_unchecked(day.stem, hour);
        tracing::trace!(%date, hour, %year, %month, %day, hour_pillar = %hour_p, "chart derived");
        Self {
            year,
            month,
            day,
            hour: hour_p,
            day_master: day.stem,
        }
    }

    /// Pillars in chart order (year, month, day, hour).
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Stems in chart order.
    pub const fn stems(&self) -> [HeavenlyStem; 4] {
        [self.year.stem, self.month.stem, self.day.stem, self.hour.stem]
    }

    pub const fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }
}
