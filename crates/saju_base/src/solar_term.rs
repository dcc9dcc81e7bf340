//! Solar terms (절기) approximated by fixed calendar days.
//!
//! Only the twelve month-opening terms are tabulated. Each is pinned to a
//! typical Gregorian date; the real crossing of the solar longitude drifts by
//! a day or so from year to year and is not computed here.

use saju_time::CivilDate;
use serde::{Deserialize, Serialize};

use crate::element::Season;

/// The 12 month-opening solar terms, starting from 소한 (early January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    Sohan,
    Ipchun,
    Gyeongchip,
    Cheongmyeong,
    Ipha,
    Mangjong,
    Soseo,
    Ipchu,
    Baengno,
    Hallo,
    Ipdong,
    Daeseol,
}

/// All 12 terms in calendar order (index 0 = 소한, January).
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Sohan,
    SolarTerm::Ipchun,
    SolarTerm::Gyeongchip,
    SolarTerm::Cheongmyeong,
    SolarTerm::Ipha,
    SolarTerm::Mangjong,
    SolarTerm::Soseo,
    SolarTerm::Ipchu,
    SolarTerm::Baengno,
    SolarTerm::Hallo,
    SolarTerm::Ipdong,
    SolarTerm::Daeseol,
];

/// Approximate day of month of each term, January first.
const TERM_DAYS: [u32; 12] = [5, 4, 5, 5, 5, 6, 7, 7, 8, 8, 7, 7];

impl SolarTerm {
    /// 0-based index (소한=0 .. 대설=11), also `month - 1`.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sohan => 0,
            Self::Ipchun => 1,
            Self::Gyeongchip => 2,
            Self::Cheongmyeong => 3,
            Self::Ipha => 4,
            Self::Mangjong => 5,
            Self::Soseo => 6,
            Self::Ipchu => 7,
            Self::Baengno => 8,
            Self::Hallo => 9,
            Self::Ipdong => 10,
            Self::Daeseol => 11,
        }
    }

    /// The term falling in calendar `month` (1..=12).
    pub fn for_month(month: u32) -> Option<Self> {
        ALL_SOLAR_TERMS.get((month as usize).checked_sub(1)?).copied()
    }

    /// Korean name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Sohan => "소한",
            Self::Ipchun => "입춘",
            Self::Gyeongchip => "경칩",
            Self::Cheongmyeong => "청명",
            Self::Ipha => "입하",
            Self::Mangjong => "망종",
            Self::Soseo => "소서",
            Self::Ipchu => "입추",
            Self::Baengno => "백로",
            Self::Hallo => "한로",
            Self::Ipdong => "입동",
            Self::Daeseol => "대설",
        }
    }

    /// Hanja form.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Sohan => "小寒",
            Self::Ipchun => "立春",
            Self::Gyeongchip => "驚蟄",
            Self::Cheongmyeong => "清明",
            Self::Ipha => "立夏",
            Self::Mangjong => "芒種",
            Self::Soseo => "小暑",
            Self::Ipchu => "立秋",
            Self::Baengno => "白露",
            Self::Hallo => "寒露",
            Self::Ipdong => "立冬",
            Self::Daeseol => "大雪",
        }
    }

    /// Calendar month the term falls in.
    pub const fn month(self) -> u32 {
        self.index() as u32 + 1
    }

    /// Approximate day of month.
    pub const fn approximate_day(self) -> u32 {
        TERM_DAYS[self.index() as usize]
    }

    /// Nominal apparent solar longitude in degrees (입춘 = 315).
    pub const fn solar_longitude_deg(self) -> u16 {
        (285 + 30 * self.index() as u16) % 360
    }

    /// Season the term opens or continues.
    pub const fn season(self) -> Season {
        match self {
            Self::Ipchun | Self::Gyeongchip | Self::Cheongmyeong => Season::Spring,
            Self::Ipha | Self::Mangjong | Self::Soseo => Season::Summer,
            Self::Ipchu | Self::Baengno | Self::Hallo => Season::Autumn,
            Self::Ipdong | Self::Daeseol | Self::Sohan => Season::Winter,
        }
    }

    /// The preceding term (소한 → 대설).
    pub const fn previous(self) -> Self {
        ALL_SOLAR_TERMS[(self.index() as usize + 11) % 12]
    }
}

/// The most recent term on or before the date. Dates before 소한 (5 January)
/// fall under the previous year's 대설.
pub fn governing_solar_term(month: u32, day: u32) -> Option<SolarTerm> {
    let this_month = SolarTerm::for_month(month)?;
    if day >= this_month.approximate_day() {
        Some(this_month)
    } else {
        Some(this_month.previous())
    }
}

/// Date of the governing term's most recent occurrence on or before `date`.
pub fn governing_term_date(date: &CivilDate) -> Option<(SolarTerm, CivilDate)> {
    let term = governing_solar_term(date.month(), date.day())?;
    let year = if term.month() > date.month() {
        date.year().checked_sub(1)?
    } else {
        date.year()
    };
    let start = CivilDate::new(year, term.month(), term.approximate_day()).ok()?;
    Some((term, start))
}

/// How far into its solar month a date falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthDepth {
    /// Fewer than 10 days after the term.
    Early,
    /// 10 to 19 days after the term.
    Middle,
    /// 20 or more days after the term.
    Late,
}

impl MonthDepth {
    pub const fn from_days_since_term(days: i64) -> Self {
        if days < 10 {
            Self::Early
        } else if days < 20 {
            Self::Middle
        } else {
            Self::Late
        }
    }

    /// Korean name (초기, 중기, 말기).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Early => "초기",
            Self::Middle => "중기",
            Self::Late => "말기",
        }
    }
}
