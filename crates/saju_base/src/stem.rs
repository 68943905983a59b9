//! The ten heavenly stems (천간).

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::color::Rgb;
use crate::element::{Element, Polarity};

/// A heavenly stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Stem {
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

/// All ten stems in cycle order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const HANJA: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];

const ELEMENTS: [Element; 10] = [
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

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> usize {
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

    /// Stem at a cycle position; wraps modulo 10.
    pub const fn from_index(index: usize) -> Self {
        ALL_STEMS[index % 10]
    }

    /// Stem written as the given hanja character.
    pub fn from_char(c: char) -> Option<Self> {
        HANJA.iter().position(|&h| h == c).map(Self::from_index)
    }

    /// Hanja character, e.g. '甲'.
    pub const fn hanja(self) -> char {
        HANJA[self.index()]
    }

    /// Korean reading, e.g. "갑".
    pub const fn korean(self) -> &'static str {
        KOREAN[self.index()]
    }

    /// Five-element affinity of the stem.
    pub const fn element(self) -> Element {
        ELEMENTS[self.index()]
    }

    /// Yin/yang polarity; even indices are yang.
    pub const fn polarity(self) -> Polarity {
        Polarity::alternating(self.index())
    }

    /// Display color of the stem's element.
    pub const fn base_color(self) -> Rgb {
        self.element().base_color()
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.hanja())
    }
}
