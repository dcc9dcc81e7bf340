//! Seasonal vitality (旺相休囚死) of the five elements.
//!
//! Each season ranks the elements along the generating cycle, starting from
//! the element in command of that season.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Season};

/// Five vitality states, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vitality {
    /// 旺
    Prosperous,
    /// 相
    Strong,
    /// 休
    Resting,
    /// 囚
    Confined,
    /// 死
    Dead,
}

/// All 5 states, strongest first.
pub const ALL_VITALITIES: [Vitality; 5] = [
    Vitality::Prosperous,
    Vitality::Strong,
    Vitality::Resting,
    Vitality::Confined,
    Vitality::Dead,
];

impl Vitality {
    pub const fn index(self) -> u8 {
        match self {
            Self::Prosperous => 0,
            Self::Strong => 1,
            Self::Resting => 2,
            Self::Confined => 3,
            Self::Dead => 4,
        }
    }

    /// Korean name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Prosperous => "왕",
            Self::Strong => "상",
            Self::Resting => "휴",
            Self::Confined => "수",
            Self::Dead => "사",
        }
    }

    /// Hanja form.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Prosperous => "旺",
            Self::Strong => "相",
            Self::Resting => "休",
            Self::Confined => "囚",
            Self::Dead => "死",
        }
    }
}

/// Element in command during a season.
pub const fn commanding_element(season: Season) -> Element {
    match season {
        Season::Spring => Element::Wood,
        Season::Summer => Element::Fire,
        Season::Autumn => Element::Metal,
        Season::Winter => Element::Water,
    }
}

/// Elements of a season ordered from prosperous to dead.
pub const fn seasonal_ranking(season: Season) -> [Element; 5] {
    let lead = commanding_element(season);
    let strong = lead.generates();
    let resting = strong.generates();
    let confined = resting.generates();
    let dead = confined.generates();
    [lead, strong, resting, confined, dead]
}

/// Vitality of `element` in `season`.
pub const fn vitality(element: Element, season: Season) -> Vitality {
    let lead = commanding_element(season).index();
    // Steps along the generating cycle from the commanding element.
    let steps = (element.index() + 5 - lead) % 5;
    ALL_VITALITIES[steps as usize]
}
