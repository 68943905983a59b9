//! The twelve earthly branches (지지) and their trine groups (삼합).

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::color::Rgb;
use crate::element::{Element, Polarity};

/// An earthly branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All twelve branches in cycle order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const HANJA: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const KOREAN: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];

const ANIMALS: [&str; 12] = [
    "쥐", "소", "호랑이", "토끼", "용", "뱀", "말", "양", "원숭이", "닭", "개", "돼지",
];

const ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> usize {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at a cycle position; wraps modulo 12.
    pub const fn from_index(index: usize) -> Self {
        ALL_BRANCHES[index % 12]
    }

    /// Branch written as the given hanja character.
    pub fn from_char(c: char) -> Option<Self> {
        HANJA.iter().position(|&h| h == c).map(Self::from_index)
    }

    /// Hanja character, e.g. '子'.
    pub const fn hanja(self) -> char {
        HANJA[self.index()]
    }

    /// Korean reading, e.g. "자".
    pub const fn korean(self) -> &'static str {
        KOREAN[self.index()]
    }

    /// Zodiac animal of the branch, in Korean.
    pub const fn animal(self) -> &'static str {
        ANIMALS[self.index()]
    }

    /// Five-element affinity of the branch.
    pub const fn element(self) -> Element {
        ELEMENTS[self.index()]
    }

    /// Yin/yang polarity.
    pub const fn polarity(self) -> Polarity {
        Polarity::alternating(self.index())
    }

    /// Display color of the branch's element.
    pub const fn base_color(self) -> Rgb {
        self.element().base_color()
    }

    /// Trine group the branch belongs to.
    pub const fn trine(self) -> TrineGroup {
        match self.index() % 4 {
            0 => TrineGroup::Water,
            1 => TrineGroup::Metal,
            2 => TrineGroup::Fire,
            _ => TrineGroup::Wood,
        }
    }

    /// Branch six positions away (충).
    pub const fn opposite(self) -> Branch {
        Self::from_index(self.index() + 6)
    }

    /// Whether the two branches stand in opposition (子午, 丑未, 寅申, 卯酉, 辰戌, 巳亥).
    pub const fn clashes_with(self, other: Branch) -> bool {
        self.opposite().index() == other.index()
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.hanja())
    }
}

/// One of the four three-branch harmony groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrineGroup {
    /// 申子辰
    Water,
    /// 寅午戌
    Fire,
    /// 巳酉丑
    Metal,
    /// 亥卯未
    Wood,
}

impl TrineGroup {
    /// The three member branches.
    pub const fn members(self) -> [Branch; 3] {
        match self {
            Self::Water => [Branch::Sin, Branch::Ja, Branch::Jin],
            Self::Fire => [Branch::In, Branch::O, Branch::Sul],
            Self::Metal => [Branch::Sa, Branch::Yu, Branch::Chuk],
            Self::Wood => [Branch::Hae, Branch::Myo, Branch::Mi],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index(), i);
            assert_eq!(Branch::from_char(b.hanja()), Some(*b));
        }
    }

    #[test]
    fn trine_membership_is_exclusive() {
        for b in ALL_BRANCHES {
            let g = b.trine();
            assert!(g.members().contains(&b), "{b:?} not in {g:?}");
        }
        let total: usize = [TrineGroup::Water, TrineGroup::Fire, TrineGroup::Metal, TrineGroup::Wood]
            .iter()
            .map(|g| g.members().len())
            .sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn clash_pairs() {
        let pairs = [('子', '午'), ('丑', '未'), ('寅', '申'), ('卯', '酉'), ('辰', '戌'), ('巳', '亥')];
        for (a, b) in pairs {
            let a = Branch::from_char(a).unwrap();
            let b = Branch::from_char(b).unwrap();
            assert!(a.clashes_with(b));
            assert!(b.clashes_with(a));
        }
        assert!(!Branch::Ja.clashes_with(Branch::Chuk));
        assert!(!Branch::Ja.clashes_with(Branch::Ja));
    }

    #[test]
    fn attributes() {
        assert_eq!(Branch::Hae.element(), Element::Water);
        assert_eq!(Branch::Hae.polarity(), Polarity::Yin);
        assert_eq!(Branch::In.animal(), "호랑이");
        assert_eq!(Branch::Myo.korean(), "묘");
    }
}
