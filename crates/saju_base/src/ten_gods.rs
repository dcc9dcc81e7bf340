//! Ten Gods (십신): the relation of each stem to the day master.
//!
//! The relation is the forward distance `(stem - day_master) mod 10`, mapped
//! onto ten named categories. The day stem itself is never counted, so a
//! chart always contributes exactly three relations (year, month, hour).

use serde::{Deserialize, Serialize};

use crate::pillars::{Chart, PillarPosition};
use crate::stem::HeavenlyStem;

/// The ten relations, in relation-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    Bigyeon,
    Geopjae,
    Siksin,
    Sanggwan,
    Jeongjae,
    Pyeonjae,
    Jeonggwan,
    Pyeongwan,
    Jeongin,
    Pyeonin,
}

/// All 10 relations (index 0 = 비견).
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Bigyeon,
    TenGod::Geopjae,
    TenGod::Siksin,
    TenGod::Sanggwan,
    TenGod::Jeongjae,
    TenGod::Pyeonjae,
    TenGod::Jeonggwan,
    TenGod::Pyeongwan,
    TenGod::Jeongin,
    TenGod::Pyeonin,
];

impl TenGod {
    pub const fn index(self) -> u8 {
        match self {
            Self::Bigyeon => 0,
            Self::Geopjae => 1,
            Self::Siksin => 2,
            Self::Sanggwan => 3,
            Self::Jeongjae => 4,
            Self::Pyeonjae => 5,
            Self::Jeonggwan => 6,
            Self::Pyeongwan => 7,
            Self::Jeongin => 8,
            Self::Pyeonin => 9,
        }
    }

    /// Korean name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Bigyeon => "비견",
            Self::Geopjae => "겁재",
            Self::Siksin => "식신",
            Self::Sanggwan => "상관",
            Self::Jeongjae => "정재",
            Self::Pyeonjae => "편재",
            Self::Jeonggwan => "정관",
            Self::Pyeongwan => "편관",
            Self::Jeongin => "정인",
            Self::Pyeonin => "편인",
        }
    }

    /// Hanja form.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Bigyeon => "比肩",
            Self::Geopjae => "劫財",
            Self::Siksin => "食神",
            Self::Sanggwan => "傷官",
            Self::Jeongjae => "正財",
            Self::Pyeonjae => "偏財",
            Self::Jeonggwan => "正官",
            Self::Pyeongwan => "偏官",
            Self::Jeongin => "正印",
            Self::Pyeonin => "偏印",
        }
    }

    /// English gloss.
    pub const fn english(self) -> &'static str {
        match self {
            Self::Bigyeon => "Companion",
            Self::Geopjae => "Rob Wealth",
            Self::Siksin => "Eating God",
            Self::Sanggwan => "Hurting Officer",
            Self::Jeongjae => "Direct Wealth",
            Self::Pyeonjae => "Indirect Wealth",
            Self::Jeonggwan => "Direct Officer",
            Self::Pyeongwan => "Seven Killings",
            Self::Jeongin => "Direct Resource",
            Self::Pyeonin => "Indirect Resource",
        }
    }
}

/// Relation of `other` to `day_master`.
pub const fn ten_god(day_master: HeavenlyStem, other: HeavenlyStem) -> TenGod {
    let relation = (other.index() + 10 - day_master.index()) % 10;
    // Pairs (relation / 2) keep their yang/yin member (relation % 2); on 0..=9
    // this is the identity, kept in this form so the pairing stays explicit.
    let god_index = (relation / 2) * 2 + (relation % 2);
    ALL_TEN_GODS[god_index as usize]
}

/// Occurrence count of one relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGodCount {
    pub god: TenGod,
    pub count: u8,
}

/// Ten-Gods summary of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGodProfile {
    /// Relations that occur, in first-encountered order (year, month, hour).
    pub distribution: Vec<TenGodCount>,
    /// Most frequent relation; ties go to the first encountered.
    pub primary: TenGod,
    /// Second most frequent relation, if a second distinct one occurs.
    pub secondary: Option<TenGod>,
    /// Relation of each counted stem.
    pub by_position: [(PillarPosition, TenGod); 3],
}

impl TenGodProfile {
    /// Occurrences of `god` (0 when absent).
    pub fn count(&self, god: TenGod) -> u8 {
        self.distribution
            .iter()
            .find(|c| c.god == god)
            .map_or(0, |c| c.count)
    }

    /// Total counted relations; always 3.
    pub fn total(&self) -> u8 {
        self.distribution.iter().map(|c| c.count).sum()
    }

    /// Relation of the stem at `position`, or `None` for the day pillar.
    pub fn at(&self, position: PillarPosition) -> Option<TenGod> {
        self.by_position
            .iter()
            .find(|(p, _)| *p == position)
            .map(|(_, g)| *g)
    }

    /// First relation (in declaration order) that does not occur.
    pub fn first_absent(&self) -> Option<TenGod> {
        ALL_TEN_GODS.into_iter().find(|g| self.count(*g) == 0)
    }
}

/// Ten-Gods profile from the day master and the chart's four stems
/// (year, month, day, hour). The day stem is skipped.
pub fn ten_gods(day_master: HeavenlyStem, stems: [HeavenlyStem; 4]) -> TenGodProfile {
    let positions = [
        (PillarPosition::Year, stems[0]),
        (PillarPosition::Month, stems[1]),
        (PillarPosition::Hour, stems[3]),
    ];

    let mut distribution: Vec<TenGodCount> = Vec::with_capacity(3);
    let by_position = positions.map(|(pos, stem)| {
        let god = ten_god(day_master, stem);
        match distribution.iter_mut().find(|c| c.god == god) {
            Some(c) => c.count += 1,
            None => distribution.push(TenGodCount { god, count: 1 }),
        }
        (pos, god)
    });

    // Stable sort keeps first-encountered order among equal counts.
    let mut ranked = distribution.clone();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    TenGodProfile {
        primary: ranked[0].god,
        secondary: ranked.get(1).map(|c| c.god),
        distribution,
        by_position,
    }
}

/// Ten-Gods profile of a chart.
pub fn ten_gods_for_chart(chart: &Chart) -> TenGodProfile {
    ten_gods(chart.day_master, chart.stems())
}
