//! Birth input: date, hour, and gender.

use saju_time::{CivilDate, validate_hour};
use serde::{Deserialize, Serialize};

use crate::error::SajuError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// A validated birth moment. Month, day, and hour are range-checked and the
/// date must exist in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthInput {
    pub date: CivilDate,
    /// Local clock hour, 0..=23.
    pub hour: u32,
    pub gender: Gender,
}

impl BirthInput {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        gender: Gender,
    ) -> Result<Self, SajuError> {
        let date = CivilDate::new(year, month, day)?;
        let hour = validate_hour(hour)?;
        Ok(Self { date, hour, gender })
    }

    pub fn from_date(date: CivilDate, hour: u32, gender: Gender) -> Result<Self, SajuError> {
        let hour = validate_hour(hour)?;
        Ok(Self { date, hour, gender })
    }

    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    pub const fn month(&self) -> u32 {
        self.date.month()
    }

    pub const fn day(&self) -> u32 {
        self.date.day()
    }
}
