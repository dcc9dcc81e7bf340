//! Five-element (오행) distribution over the four pillars.
//!
//! Stems weigh 2 and branches weigh 1, so a chart always carries a total
//! weight of 12. Percentages are rounded independently and may not sum to
//! exactly 100.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, Element};
use crate::error::SajuError;
use crate::pillar::Pillar;

/// Weight a stem adds to its element.
pub const STEM_WEIGHT: u32 = 2;
/// Weight a branch adds to its element.
pub const BRANCH_WEIGHT: u32 = 1;

/// Element balance of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveElementProfile {
    /// Weighted count per element, indexed by [`Element::index`].
    pub distribution: [u32; 5],
    /// Rounded percentage per element, indexed by [`Element::index`].
    pub percentages: [u32; 5],
    pub strongest: Element,
    pub weakest: Element,
    /// min(percentages) / max(percentages), in [0, 1].
    pub balance: f64,
}

impl FiveElementProfile {
    /// Build from raw element weights.
    ///
    /// Fails with [`SajuError::DegenerateProfile`] when every weight is zero.
    pub fn from_weights(distribution: [u32; 5]) -> Result<Self, SajuError> {
        let total: u64 = distribution.iter().copied().map(u64::from).sum();
        if total == 0 {
            return Err(SajuError::DegenerateProfile);
        }

        // round(w / total * 100) with halves rounded up, in integers. The
        // quotient is at most 100.
        let percentages =
            distribution.map(|w| ((200 * u64::from(w) + total) / (2 * total)) as u32);

        let mut strongest = 0;
        let mut weakest = 0;
        for i in 1..5 {
            if percentages[i] > percentages[strongest] {
                strongest = i;
            }
            if percentages[i] < percentages[weakest] {
                weakest = i;
            }
        }

        let max = percentages[strongest];
        if max == 0 {
            return Err(SajuError::DegenerateProfile);
        }
        let balance = percentages[weakest] as f64 / max as f64;

        Ok(Self {
            distribution,
            percentages,
            strongest: ALL_ELEMENTS[strongest],
            weakest: ALL_ELEMENTS[weakest],
            balance,
        })
    }

    pub fn weight(&self, element: Element) -> u32 {
        self.distribution[element.index() as usize]
    }

    pub fn percent(&self, element: Element) -> u32 {
        self.percentages[element.index() as usize]
    }

    /// Balance on a 0..=100 scale, rounded.
    pub fn balance_score(&self) -> u32 {
        (self.balance * 100.0).round() as u32
    }
}

/// Element weights of a set of pillars.
pub fn element_weights(pillars: &[Pillar]) -> [u32; 5] {
    let mut weights = [0u32; 5];
    for p in pillars {
        weights[p.stem.element().index() as usize] += STEM_WEIGHT;
        weights[p.branch.element().index() as usize] += BRANCH_WEIGHT;
    }
    weights
}

/// Five-element profile of the four pillars.
pub fn five_elements(pillars: &[Pillar; 4]) -> Result<FiveElementProfile, SajuError> {
    FiveElementProfile::from_weights(element_weights(pillars))
}
