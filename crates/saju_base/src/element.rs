//! Five elements (오행), polarity, and the generating/controlling cycles.

use serde::Serialize;

use crate::color::Rgb;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All elements in canonical order (wood, fire, earth, metal, water).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// Element each element generates, indexed by [`Element::index`].
const GENERATES: [Element; 5] = [
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
    Element::Wood,
];

/// Element each element controls, indexed by [`Element::index`].
const CONTROLS: [Element; 5] = [
    Element::Earth,
    Element::Metal,
    Element::Water,
    Element::Wood,
    Element::Fire,
];

const BASE_COLORS: [Rgb; 5] = [
    Rgb::new(0x2E, 0x8B, 0x57),
    Rgb::new(0xD1, 0x49, 0x5B),
    Rgb::new(0xC9, 0xA2, 0x27),
    Rgb::new(0xC0, 0xC0, 0xC0),
    Rgb::new(0x2F, 0x4F, 0x4F),
];

const LABELS: [&str; 5] = ["목(木)", "화(火)", "토(土)", "금(金)", "수(水)"];

impl Element {
    /// 0-based index in canonical order.
    pub const fn index(self) -> usize {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates (생).
    pub const fn generates(self) -> Element {
        GENERATES[self.index()]
    }

    /// The element this one controls (극).
    pub const fn controls(self) -> Element {
        CONTROLS[self.index()]
    }

    /// Display colour of the element.
    pub const fn base_color(self) -> Rgb {
        BASE_COLORS[self.index()]
    }

    /// Korean label with the hanja, e.g. "목(木)".
    pub const fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    /// How `other` stands relative to `self` in the two cycles.
    ///
    /// Checked in a fixed order: same element, `self` generates `other`,
    /// `self` controls `other`, `other` controls `self`, `other` generates
    /// `self`. Returns `None` only if the cycle tables leave the pair
    /// unrelated.
    pub fn relation_to(self, other: Element) -> Option<ElementRelation> {
        if self == other {
            Some(ElementRelation::Same)
        } else if self.generates() == other {
            Some(ElementRelation::Generates)
        } else if self.controls() == other {
            Some(ElementRelation::Controls)
        } else if other.controls() == self {
            Some(ElementRelation::ControlledBy)
        } else if other.generates() == self {
            Some(ElementRelation::GeneratedBy)
        } else {
            None
        }
    }
}

/// Relation of a target element to a reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// Reference generates target.
    Generates,
    /// Reference controls target.
    Controls,
    /// Target controls reference.
    ControlledBy,
    /// Target generates reference.
    GeneratedBy,
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of the `n`-th member of an alternating cycle starting at yang.
    pub const fn alternating(n: usize) -> Self {
        if n % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
    }

    #[test]
    fn controlling_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Earth.controls(), Element::Water);
        assert_eq!(Element::Water.controls(), Element::Fire);
        assert_eq!(Element::Fire.controls(), Element::Metal);
        assert_eq!(Element::Metal.controls(), Element::Wood);
    }

    #[test]
    fn every_pair_is_related() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                assert!(a.relation_to(b).is_some(), "{a:?} -> {b:?}");
            }
        }
    }

    #[test]
    fn relation_directions() {
        use ElementRelation::*;
        assert_eq!(Element::Wood.relation_to(Element::Fire), Some(Generates));
        assert_eq!(Element::Wood.relation_to(Element::Earth), Some(Controls));
        assert_eq!(Element::Wood.relation_to(Element::Metal), Some(ControlledBy));
        assert_eq!(Element::Wood.relation_to(Element::Water), Some(GeneratedBy));
    }

    #[test]
    fn base_colors_render() {
        assert_eq!(Element::Wood.base_color().to_string(), "#2E8B57");
        assert_eq!(Element::Water.base_color().to_string(), "#2F4F4F");
    }

    #[test]
    fn alternating_polarity() {
        assert_eq!(Polarity::alternating(0), Polarity::Yang);
        assert_eq!(Polarity::alternating(5), Polarity::Yin);
    }
}
