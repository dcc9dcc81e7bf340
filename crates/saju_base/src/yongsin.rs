//! Yongsin/Gisin (용신/기신): favorable and unfavorable element.
//!
//! A fixed table keyed by (day-master element, season). Earth and water day
//! masters use one pair for every season; the others single out one or two
//! seasons and share a pair across the rest. The table is checked for
//! exhaustiveness when a calculator is built, not at lookup time.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, ALL_SEASONS, Element, Season};
use crate::error::SajuError;

/// Favorable and unfavorable element; never equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YongsinGisin {
    pub yongsin: Element,
    pub gisin: Element,
}

/// One table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YongsinRule {
    pub day_master: Element,
    pub season: Season,
    pub pair: YongsinGisin,
}

const fn rule(
    day_master: Element,
    season: Season,
    yongsin: Element,
    gisin: Element,
) -> YongsinRule {
    YongsinRule {
        day_master,
        season,
        pair: YongsinGisin { yongsin, gisin },
    }
}

use Element::{Earth, Fire, Metal, Water, Wood};
use Season::{Autumn, Spring, Summer, Winter};

/// The standard table: 5 elements × 4 seasons.
pub const STANDARD_RULES: [YongsinRule; 20] = [
    // Wood: cold or early seasons want fire, otherwise water
    rule(Wood, Spring, Fire, Metal),
    rule(Wood, Summer, Water, Earth),
    rule(Wood, Autumn, Water, Earth),
    rule(Wood, Winter, Fire, Metal),
    // Fire: summer wants earth
    rule(Fire, Spring, Wood, Water),
    rule(Fire, Summer, Earth, Metal),
    rule(Fire, Autumn, Wood, Water),
    rule(Fire, Winter, Wood, Water),
    rule(Earth, Spring, Fire, Wood),
    rule(Earth, Summer, Fire, Wood),
    rule(Earth, Autumn, Fire, Wood),
    rule(Earth, Winter, Fire, Wood),
    // Metal: autumn wants fire
    rule(Metal, Spring, Earth, Fire),
    rule(Metal, Summer, Earth, Fire),
    rule(Metal, Autumn, Fire, Water),
    rule(Metal, Winter, Earth, Fire),
    rule(Water, Spring, Metal, Earth),
    rule(Water, Summer, Metal, Earth),
    rule(Water, Autumn, Metal, Earth),
    rule(Water, Winter, Metal, Earth),
];

/// A validated yongsin/gisin table.
#[derive(Debug, Clone, Copy)]
pub struct YongsinTable {
    rules: &'static [YongsinRule],
}

impl YongsinTable {
    /// Validate `rules`: every (element, season) pair must have a row and no
    /// row may name the same element as yongsin and gisin.
    pub fn new(rules: &'static [YongsinRule]) -> Result<Self, SajuError> {
        for element in ALL_ELEMENTS {
            for season in ALL_SEASONS {
                let row = rules
                    .iter()
                    .find(|r| r.day_master == element && r.season == season)
                    .ok_or(SajuError::UnmappedRule { element, season })?;
                if row.pair.yongsin == row.pair.gisin {
                    return Err(SajuError::InvalidRule { element, season });
                }
            }
        }
        tracing::debug!(rows = rules.len(), "yongsin table validated");
        Ok(Self { rules })
    }

    /// The validated standard table.
    pub fn standard() -> Result<Self, SajuError> {
        Self::new(&STANDARD_RULES)
    }

    pub fn rules(&self) -> &'static [YongsinRule] {
        self.rules
    }

    /// Look up the pair for a day-master element and season.
    pub fn lookup(&self, day_master: Element, season: Season) -> Result<YongsinGisin, SajuError> {
        self.rules
            .iter()
            .find(|r| r.day_master == day_master && r.season == season)
            .map(|r| r.pair)
            .ok_or(SajuError::UnmappedRule {
                element: day_master,
                season,
            })
    }
}
