//! Heavenly Stems (천간), the 10-position cycle.
//!
//! Stems pair up per element in generating order, alternating yang/yin:
//! 갑을 wood, 병정 fire, 무기 earth, 경신 metal, 임계 water.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (index 0 = 갑).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Gap,
    HeavenlyStem::Eul,
    HeavenlyStem::Byeong,
    HeavenlyStem::Jeong,
    HeavenlyStem::Mu,
    HeavenlyStem::Gi,
    HeavenlyStem::Gyeong,
    HeavenlyStem::Sin,
    HeavenlyStem::Im,
    HeavenlyStem::Gye,
];

const STEM_KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl HeavenlyStem {
    /// Stem at a cycle position; any integer is reduced modulo 10.
    pub const fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Korean name.
    pub fn korean(self) -> &'static str {
        STEM_KOREAN[self.index() as usize]
    }

    /// Hanja form.
    pub fn hanja(self) -> &'static str {
        STEM_HANJA[self.index() as usize]
    }

    /// Revised Romanization.
    pub const fn romanized(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    /// Element: two consecutive stems per element.
    pub const fn element(self) -> Element {
        match self.index() / 2 {
            0 => Element::Wood,
            1 => Element::Fire,
            2 => Element::Earth,
            3 => Element::Metal,
            _ => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// The stem `steps` positions later in the cycle (negative steps go back).
    pub const fn offset(self, steps: i64) -> Self {
        Self::from_index(self.index() as i64 + steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), 10);
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn element_pattern_period_two() {
        let expected = [
            Element::Wood,
            Element::Wood,
            Element::Fire,
            Element::Fire,
            Element::Earth,
            Element::Earth,
            Element::Metal,
            Element::Metal,
            Element::Water,
            Element::Water,
        ];
        for (s, e) in ALL_STEMS.iter().zip(expected) {
            assert_eq!(s.element(), e, "{}", s.korean());
        }
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(HeavenlyStem::Gap.polarity(), Polarity::Yang);
        assert_eq!(HeavenlyStem::Eul.polarity(), Polarity::Yin);
        assert_eq!(HeavenlyStem::Gye.polarity(), Polarity::Yin);
    }

    #[test]
    fn negative_index_wraps() {
        assert_eq!(HeavenlyStem::from_index(-1), HeavenlyStem::Gye);
        assert_eq!(HeavenlyStem::from_index(-10), HeavenlyStem::Gap);
        assert_eq!(HeavenlyStem::from_index(23), HeavenlyStem::Jeong);
    }

    #[test]
    fn offset_both_directions() {
        assert_eq!(HeavenlyStem::Im.offset(3), HeavenlyStem::Eul);
        assert_eq!(HeavenlyStem::Eul.offset(-3), HeavenlyStem::Im);
    }

    #[test]
    fn names() {
        assert_eq!(HeavenlyStem::Gap.korean(), "갑");
        assert_eq!(HeavenlyStem::Gye.hanja(), "癸");
        assert_eq!(HeavenlyStem::Gyeong.romanized(), "Gyeong");
    }
}
