//! A stem/branch pillar with its display colour.

use std::fmt::{Display, Formatter};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::color::Rgb;
use crate::error::SajuError;
use crate::stem::Stem;

/// One pillar of the chart (간지).
///
/// The colour is derived once at construction: the shared element colour
/// when stem and branch agree, otherwise the 0.65/0.35 blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
    color: Rgb,
}

impl Pillar {
    /// Pair a stem with a branch; the color blends both elements when they differ.
    pub fn new(stem: Stem, branch: Branch) -> Self {
        let color = if stem.element() == branch.element() {
            stem.base_color()
        } else {
            Rgb::blend(stem.base_color(), branch.base_color())
        };
        Self {
            stem,
            branch,
            color,
        }
    }

    /// Build from hanja characters.
    pub fn from_chars(stem: char, branch: char) -> Result<Self, SajuError> {
        let s = Stem::from_char(stem).ok_or(SajuError::InvalidSymbol(stem))?;
        let b = Branch::from_char(branch).ok_or(SajuError::InvalidSymbol(branch))?;
        Ok(Self::new(s, b))
    }

    /// Build from two-character ganzhi text such as "甲子".
    pub fn from_ganzhi(text: &str) -> Result<Self, SajuError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(s), Some(b)) => Self::from_chars(s, b),
            (Some(c), None) => Err(SajuError::InvalidSymbol(c)),
            _ => Err(SajuError::InvalidInput(format!("empty ganzhi '{text}'"))),
        }
    }

    /// Pillar at a position of the sixty-pair cycle (甲子 = 0); wraps modulo 60.
    pub fn from_sexagenary(index: usize) -> Self {
        Self::new(Stem::from_index(index % 60), Branch::from_index(index % 60))
    }

    /// Position in the sixty-pair cycle, or `None` for a mixed-parity pair.
    pub const fn sexagenary_index(&self) -> Option<usize> {
        let s = self.stem.index();
        let b = self.branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        Some((6 * s + 60 - (5 * b) % 60) % 60)
    }

    /// Heavenly stem.
    pub const fn stem(&self) -> Stem {
        self.stem
    }

    /// Earthly branch.
    pub const fn branch(&self) -> Branch {
        self.branch
    }

    /// Display color.
    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Pillar", 5)?;
        st.serialize_field("stem", &self.stem)?;
        st.serialize_field("branch", &self.branch)?;
        st.serialize_field("stem_korean", self.stem.korean())?;
        st.serialize_field("branch_korean", self.branch.korean())?;
        st.serialize_field("color", &self.color)?;
        st.end()
    }
}
