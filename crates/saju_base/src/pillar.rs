//! A pillar (주): one heavenly stem paired with one earthly branch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::element::Element;
use crate::stem::HeavenlyStem;

/// A stem-branch pair. Display fields are lookups, not stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Build from raw cycle positions; each is normalized (mod 10, mod 12)
    /// so negative offsets are safe.
    pub const fn from_indices(stem: i64, branch: i64) -> Self {
        Self {
            stem: HeavenlyStem::from_index(stem),
            branch: EarthlyBranch::from_index(branch),
        }
    }

    /// Pillar at position `n` of the 60-pair cycle (갑자 = 0).
    pub const fn from_sexagenary(n: i64) -> Self {
        Self::from_indices(n, n)
    }

    /// Position in the 60-pair cycle, or `None` when stem and branch
    /// polarities differ (such pairs never occur in the year or day cycles).
    pub const fn sexagenary_index(&self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        // n ≡ s (mod 10), n ≡ b (mod 12), 0 <= n < 60
        let mut n = s;
        while n % 12 != b {
            n += 10;
        }
        Some(n)
    }

    /// Element of the stem; the pillar's headline element.
    pub const fn element(&self) -> Element {
        self.stem.element()
    }

    /// Two-syllable Korean name, e.g. "갑자".
    pub fn korean(&self) -> String {
        format!("{}{}", self.stem.korean(), self.branch.korean())
    }

    /// Two-character Hanja form, e.g. "甲子".
    pub fn hanja(&self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// The pillar `steps` positions along both cycles.
    pub const fn offset(&self, steps: i64) -> Self {
        Self {
            stem: self.stem.offset(steps),
            branch: self.branch.offset(steps),
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}({}{})",
            self.stem.korean(),
            self.branch.korean(),
            self.stem.hanja(),
            self.branch.hanja()
        )
    }
}
