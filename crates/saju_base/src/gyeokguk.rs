//! Format (격국) detection from the month stem's Ten-God relation.

use serde::{Deserialize, Serialize};

use crate::pillars::PillarPosition;
use crate::ten_gods::{TenGod, TenGodProfile};

/// Chart format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// 정관격
    Jeonggwan,
    /// 정재격
    Jeongjae,
    /// 정인격
    Jeongin,
    /// 식신격
    Siksin,
    /// 일반격: the month relation names no regular format.
    Irregular,
}

impl Format {
    /// Regular format led by `god`, if it has one.
    pub const fn from_month_relation(god: TenGod) -> Self {
        match god {
            TenGod::Jeonggwan => Self::Jeonggwan,
            TenGod::Jeongjae => Self::Jeongjae,
            TenGod::Jeongin => Self::Jeongin,
            TenGod::Siksin => Self::Siksin,
            _ => Self::Irregular,
        }
    }

    /// Rank among regular formats (1 highest); `None` when irregular.
    pub const fn priority(self) -> Option<u8> {
        match self {
            Self::Jeonggwan => Some(1),
            Self::Jeongjae => Some(2),
            Self::Jeongin => Some(3),
            Self::Siksin => Some(4),
            Self::Irregular => None,
        }
    }

    pub const fn is_regular(self) -> bool {
        self.priority().is_some()
    }

    /// Korean name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Jeonggwan => "정관격",
            Self::Jeongjae => "정재격",
            Self::Jeongin => "정인격",
            Self::Siksin => "식신격",
            Self::Irregular => "일반격",
        }
    }

    /// The Ten-God that leads a regular format.
    pub const fn leading_relation(self) -> Option<TenGod> {
        match self {
            Self::Jeonggwan => Some(TenGod::Jeonggwan),
            Self::Jeongjae => Some(TenGod::Jeongjae),
            Self::Jeongin => Some(TenGod::Jeongin),
            Self::Siksin => Some(TenGod::Siksin),
            Self::Irregular => None,
        }
    }
}

/// Format of a chart from its Ten-Gods profile.
pub fn chart_format(profile: &TenGodProfile) -> Format {
    profile
        .at(PillarPosition::Month)
        .map_or(Format::Irregular, Format::from_month_relation)
}
