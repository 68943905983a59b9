//! RGB display colours and the stem/branch blend.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

/// Stem weight in a mixed-element pillar colour.
pub const STEM_WEIGHT: f64 = 0.65;

/// Branch weight in a mixed-element pillar colour.
pub const BRANCH_WEIGHT: f64 = 0.35;

/// An 8-bit RGB colour, rendered as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Color from its red, green and blue channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise weighted mix, rounded half away from zero.
    pub fn blend(stem: Rgb, branch: Rgb) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            (a as f64 * STEM_WEIGHT + b as f64 * BRANCH_WEIGHT)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            mix(stem.r, branch.r),
            mix(stem.g, branch.g),
            mix(stem.b, branch.b),
        )
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
