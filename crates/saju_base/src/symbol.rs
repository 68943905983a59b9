//! Character-level lookup across stems and branches.

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::error::SajuError;
use crate::stem::Stem;

/// Any one of the 22 chart characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Stem(Stem),
    Branch(Branch),
}

impl Symbol {
    /// Resolve a hanja character; stems are tried first.
    pub fn from_char(c: char) -> Result<Self, SajuError> {
        Stem::from_char(c)
            .map(Self::Stem)
            .or_else(|| Branch::from_char(c).map(Self::Branch))
            .ok_or(SajuError::InvalidSymbol(c))
    }

    /// Element of the underlying stem or branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Stem(s) => s.element(),
            Self::Branch(b) => b.element(),
        }
    }

    /// Polarity of the underlying stem or branch.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Stem(s) => s.polarity(),
            Self::Branch(b) => b.polarity(),
        }
    }

    /// Hanja character.
    pub const fn hanja(self) -> char {
        match self {
            Self::Stem(s) => s.hanja(),
            Self::Branch(b) => b.hanja(),
        }
    }
}

impl From<Stem> for Symbol {
    fn from(s: Stem) -> Self {
        Self::Stem(s)
    }
}

impl From<Branch> for Symbol {
    fn from(b: Branch) -> Self {
        Self::Branch(b)
    }
}
