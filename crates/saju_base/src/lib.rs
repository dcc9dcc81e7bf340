//! Four-pillar (사주) chart calculations.
//!
//! This crate provides:
//! - Heavenly Stem and Earthly Branch tables with element, polarity, and zodiac data
//! - Year, month, day, and hour pillar derivation from a civil date and hour
//! - Ten Gods relations, five-element balance, and the yongsin/gisin table
//! - Daeun luck cycles, seasonal vitality, and format detection
//! - Fixed-date solar-term approximation
//! - Deterministic fortune scores and period forecasts
//!
//! Every operation is a pure function of its inputs. Solar terms are pinned
//! to typical calendar days; no ephemeris is consulted.

pub mod birth;
pub mod branch;
pub mod daeun;
pub mod element;
pub mod error;
pub mod five_elements;
pub mod forecast;
pub mod gyeokguk;
pub mod pillar;
pub mod pillars;
pub mod score;
pub mod solar_term;
pub mod stem;
pub mod ten_gods;
pub mod vitality;
pub mod yongsin;

pub use birth::{BirthInput, Gender};
pub use branch::{ALL_BRANCHES, EarthlyBranch, ZodiacAnimal};
pub use daeun::{
    AgeRange, CYCLE_COUNT, CYCLE_YEARS, Direction, LuckCycle, LuckTimeline, daeun_cycles,
    daeun_direction, luck_timeline,
};
pub use element::{ALL_ELEMENTS, ALL_SEASONS, Element, Polarity, Season};
pub use error::SajuError;
pub use five_elements::{
    BRANCH_WEIGHT, FiveElementProfile, STEM_WEIGHT, element_weights, five_elements,
};
pub use forecast::{
    ALL_FORECAST_CATEGORIES, DEFAULT_FORECAST_OFFSETS, ForecastCategory, Outlook,
    PeriodForecast, PeriodRating, forecast_seed, period_forecasts, period_rating,
};
pub use gyeokguk::{Format, chart_format};
pub use pillar::Pillar;
pub use pillars::{
    ALL_POSITIONS, Chart, HOUR_BRANCHES, HOUR_STEMS, MONTH_BOUNDARY_DAY, PillarPosition,
    YEAR_EPOCH, day_pillar, effective_month, hour_pillar, hour_window, month_pillar, year_pillar,
};
pub use score::{
    ALL_SCORE_CATEGORIES, CategoryParams, FortuneScores, SCORE_MODULUS, ScoreCategory,
    ScoreSeed, balance_bonus, fortune_score, fortune_scores, raw_value,
};
pub use solar_term::{
    ALL_SOLAR_TERMS, MonthDepth, SolarTerm, governing_solar_term, governing_term_date,
};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use ten_gods::{
    ALL_TEN_GODS, TenGod, TenGodCount, TenGodProfile, ten_god, ten_gods, ten_gods_for_chart,
};
pub use vitality::{ALL_VITALITIES, Vitality, commanding_element, seasonal_ranking, vitality};
pub use yongsin::{STANDARD_RULES, YongsinGisin, YongsinRule, YongsinTable};
