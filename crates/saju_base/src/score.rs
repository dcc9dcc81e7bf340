//! Deterministic fortune scores.
//!
//! A composite seed built from all eight stem/branch indices is pushed
//! through a per-category multiplicative congruential step modulo
//! [`SCORE_MODULUS`] and mapped linearly into the category's band. All
//! arithmetic is integer, so identical inputs give identical scores on
//! every platform.

use serde::{Deserialize, Serialize};

use crate::five_elements::FiveElementProfile;
use crate::pillars::Chart;
use crate::stem::HeavenlyStem;

/// Modulus of the congruential step.
pub const SCORE_MODULUS: u64 = 982_451;

/// Score categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    Overall,
    Love,
    Career,
    Health,
    Wealth,
}

/// All 5 categories in output order.
pub const ALL_SCORE_CATEGORIES: [ScoreCategory; 5] = [
    ScoreCategory::Overall,
    ScoreCategory::Love,
    ScoreCategory::Career,
    ScoreCategory::Health,
    ScoreCategory::Wealth,
];

/// Constants of one category's score function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryParams {
    pub multiplier: u64,
    pub additive: u64,
    pub offset: u64,
    /// Lowest score.
    pub base: u32,
    /// Number of distinct scores; the highest is `base + range - 1`.
    pub range: u32,
}

impl ScoreCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Love => "love",
            Self::Career => "career",
            Self::Health => "health",
            Self::Wealth => "wealth",
        }
    }

    pub const fn params(self) -> CategoryParams {
        let (multiplier, additive, offset, base, range) = match self {
            Self::Overall => (9301, 49297, 137, 75, 20),
            Self::Love => (7919, 65537, 251, 70, 25),
            Self::Career => (8191, 32771, 389, 80, 15),
            Self::Health => (6151, 98317, 467, 75, 20),
            Self::Wealth => (5381, 76543, 523, 70, 25),
        };
        CategoryParams {
            multiplier,
            additive,
            offset,
            base,
            range,
        }
    }

    /// Highest attainable score.
    pub const fn max_score(self) -> u32 {
        let p = self.params();
        p.base + p.range - 1
    }

    /// Bonus for a day master favoured in this category.
    pub const fn day_master_bonus(self, day_master: HeavenlyStem) -> u32 {
        match (self, day_master) {
            (Self::Career, HeavenlyStem::Gap) => 3,
            (Self::Love, HeavenlyStem::Byeong) => 2,
            (Self::Health, HeavenlyStem::Mu) => 2,
            (Self::Wealth, HeavenlyStem::Gyeong) => 3,
            _ => 0,
        }
    }
}

/// Bonus from the 0..=100 element balance score.
pub const fn balance_bonus(balance_score: u32) -> u32 {
    if balance_score > 80 {
        2
    } else if balance_score > 60 {
        1
    } else {
        0
    }
}

/// Composite seed of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreSeed(pub u64);

impl ScoreSeed {
    /// Weighted sum of the day master and all eight stem/branch indices.
    pub fn from_chart(chart: &Chart) -> Self {
        let i = |v: u8| u64::from(v);
        let seed = i(chart.day_master.index()) * 1000
            + i(chart.year.stem.index()) * 100
            + i(chart.year.branch.index()) * 10
            + i(chart.month.stem.index())
            + i(chart.month.branch.index()) * 50
            + i(chart.day.stem.index()) * 25
            + i(chart.day.branch.index()) * 7
            + i(chart.hour.stem.index()) * 3
            + i(chart.hour.branch.index());
        Self(seed)
    }

    /// Fold a caller-supplied identity into the seed, so that two people
    /// with the same chart can receive distinct scores.
    pub const fn with_identity(self, salt: u32) -> Self {
        Self(self.0 + salt as u64)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Raw congruential value in `0..SCORE_MODULUS`.
pub const fn raw_value(category: ScoreCategory, seed: ScoreSeed) -> u64 {
    let p = category.params();
    ((seed.0 + p.offset) * p.multiplier + p.additive) % SCORE_MODULUS
}

/// Score for one category, clamped to `[base, base + range - 1]`.
pub const fn fortune_score(
    category: ScoreCategory,
    seed: ScoreSeed,
    day_master: HeavenlyStem,
    balance_score: u32,
) -> u32 {
    let p = category.params();
    let scaled = (raw_value(category, seed) * p.range as u64 / SCORE_MODULUS) as u32;
    let score =
        p.base + scaled + category.day_master_bonus(day_master) + balance_bonus(balance_score);
    let max = category.max_score();
    if score > max { max } else { score }
}

/// Scores for every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FortuneScores {
    pub overall: u32,
    pub love: u32,
    pub career: u32,
    pub health: u32,
    pub wealth: u32,
}

impl FortuneScores {
    pub const fn get(&self, category: ScoreCategory) -> u32 {
        match category {
            ScoreCategory::Overall => self.overall,
            ScoreCategory::Love => self.love,
            ScoreCategory::Career => self.career,
            ScoreCategory::Health => self.health,
            ScoreCategory::Wealth => self.wealth,
        }
    }
}

/// Scores of a chart with its element profile and an identity salt.
pub fn fortune_scores(
    chart: &Chart,
    elements: &FiveElementProfile,
    identity_salt: u32,
) -> FortuneScores {
    let seed = ScoreSeed::from_chart(chart).with_identity(identity_salt);
    let balance = elements.balance_score();
    let score = |c| fortune_score(c, seed, chart.day_master, balance);
    let scores = FortuneScores {
        overall: score(ScoreCategory::Overall),
        love: score(ScoreCategory::Love),
        career: score(ScoreCategory::Career),
        health: score(ScoreCategory::Health),
        wealth: score(ScoreCategory::Wealth),
    };
    tracing::trace!(seed = seed.value(), ?scores, "fortune scores");
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_of_1984_02_04() {
        let chart = Chart::compute(1984, 2, 4, 0).unwrap();
        assert_eq!(ScoreSeed::from_chart(&chart), ScoreSeed(4268));
        assert_eq!(ScoreSeed(4268).with_identity(42), ScoreSeed(4310));
    }

    #[test]
    fn raw_values() {
        let seed = ScoreSeed(4268);
        assert_eq!(raw_value(ScoreCategory::Overall, seed), 739_711);
        assert_eq!(raw_value(ScoreCategory::Health, seed), 732_223);
        assert_eq!(raw_value(ScoreCategory::Wealth, seed), 313_188);
    }

    #[test]
    fn day_master_bonus_applies_to_one_category() {
        let seed = ScoreSeed(4268);
        assert_eq!(fortune_score(ScoreCategory::Health, seed, HeavenlyStem::Mu, 0), 91);
        assert_eq!(fortune_score(ScoreCategory::Health, seed, HeavenlyStem::Gap, 0), 89);
    }

    #[test]
    fn balance_bonus_bands() {
        assert_eq!(balance_bonus(60), 0);
        assert_eq!(balance_bonus(61), 1);
        assert_eq!(balance_bonus(80), 1);
        assert_eq!(balance_bonus(81), 2);
    }

    #[test]
    fn clamped_to_band() {
        for salt in 0..2000 {
            let seed = ScoreSeed(4268).with_identity(salt);
            for c in ALL_SCORE_CATEGORIES {
                let s = fortune_score(c, seed, HeavenlyStem::Gap, 100);
                assert!(s >= c.params().base && s <= c.max_score(), "{c:?} {s}");
            }
        }
    }
}
