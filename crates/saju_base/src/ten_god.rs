//! Ten Gods (십신): the relation of each chart character to the day master.
//!
//! The label is fixed by two facts: how the target's element stands to the
//! day master's element in the generating/controlling cycles, and whether
//! the two share polarity. Same polarity selects the first label of each
//! pair (비견, 식신, 편재, 편관, 편인).

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::element::ElementRelation;
use crate::error::SajuError;
use crate::stem::Stem;
use crate::symbol::Symbol;

/// A Ten-God label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// 비견: same element, same polarity.
    Peer,
    /// 겁재: same element, opposite polarity.
    Rival,
    /// 식신: day master generates target, same polarity.
    Eater,
    /// 상관: day master generates target, opposite polarity.
    Hurter,
    /// 편재: day master controls target, same polarity.
    IndirectWealth,
    /// 정재: day master controls target, opposite polarity.
    DirectWealth,
    /// 편관: target controls day master, same polarity.
    IndirectOfficer,
    /// 정관: target controls day master, opposite polarity.
    DirectOfficer,
    /// 편인: target generates day master, same polarity.
    IndirectResource,
    /// 정인: target generates day master, opposite polarity.
    DirectResource,
    /// 일원(본인): the day master itself.
    DayMaster,
}

/// All eleven labels.
pub const ALL_TEN_GODS: [TenGod; 11] = [
    TenGod::Peer,
    TenGod::Rival,
    TenGod::Eater,
    TenGod::Hurter,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::IndirectOfficer,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
    TenGod::DayMaster,
];

impl TenGod {
    /// Korean label, e.g. "식신".
    pub const fn label(self) -> &'static str {
        match self {
            Self::Peer => "비견",
            Self::Rival => "겁재",
            Self::Eater => "식신",
            Self::Hurter => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::IndirectOfficer => "편관",
            Self::DirectOfficer => "정관",
            Self::IndirectResource => "편인",
            Self::DirectResource => "정인",
            Self::DayMaster => "일원(본인)",
        }
    }

    fn from_relation(relation: ElementRelation, same_polarity: bool) -> Self {
        match (relation, same_polarity) {
            (ElementRelation::Same, true) => Self::Peer,
            (ElementRelation::Same, false) => Self::Rival,
            (ElementRelation::Generates, true) => Self::Eater,
            (ElementRelation::Generates, false) => Self::Hurter,
            (ElementRelation::Controls, true) => Self::IndirectWealth,
            (ElementRelation::Controls, false) => Self::DirectWealth,
            (ElementRelation::ControlledBy, true) => Self::IndirectOfficer,
            (ElementRelation::ControlledBy, false) => Self::DirectOfficer,
            (ElementRelation::GeneratedBy, true) => Self::IndirectResource,
            (ElementRelation::GeneratedBy, false) => Self::DirectResource,
        }
    }
}

impl Display for TenGod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TenGod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Ten-God label of `target` relative to `day_master`.
///
/// A target that is the day-master stem itself yields [`TenGod::DayMaster`],
/// wherever in the chart it appears.
pub fn ten_god(day_master: Stem, target: impl Into<Symbol>) -> Result<TenGod, SajuError> {
    let target = target.into();
    if target == Symbol::Stem(day_master) {
        return Ok(TenGod::DayMaster);
    }

    let relation = day_master
        .element()
        .relation_to(target.element())
        .ok_or_else(|| {
            tracing::error!(
                day_master = %day_master,
                symbol = %target.hanja(),
                "element pair missing from the cycle tables"
            );
            SajuError::UnresolvableRelation {
                day_master: day_master.hanja(),
                target: target.hanja(),
            }
        })?;

    Ok(TenGod::from_relation(
        relation,
        day_master.polarity() == target.polarity(),
    ))
}

/// Ten-God label for two hanja characters.
pub fn ten_god_of_chars(day_master: char, target: char) -> Result<TenGod, SajuError> {
    let dm = Stem::from_char(day_master).ok_or(SajuError::InvalidSymbol(day_master))?;
    ten_god(dm, Symbol::from_char(target)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::{ALL_BRANCHES, Branch};
    use crate::element::Element;
    use crate::stem::ALL_STEMS;

    fn tg(dm: char, t: char) -> TenGod {
        ten_god_of_chars(dm, t).unwrap()
    }

    #[test]
    fn self_is_day_master() {
        for s in ALL_STEMS {
            assert_eq!(ten_god(s, s).unwrap(), TenGod::DayMaster);
        }
    }

    #[test]
    fn gap_day_master_row() {
        assert_eq!(tg('甲', '乙'), TenGod::Rival);
        assert_eq!(tg('甲', '丙'), TenGod::Eater);
        assert_eq!(tg('甲', '丁'), TenGod::Hurter);
        assert_eq!(tg('甲', '戊'), TenGod::IndirectWealth);
        assert_eq!(tg('甲', '己'), TenGod::DirectWealth);
        assert_eq!(tg('甲', '庚'), TenGod::IndirectOfficer);
        assert_eq!(tg('甲', '辛'), TenGod::DirectOfficer);
        assert_eq!(tg('甲', '壬'), TenGod::IndirectResource);
        assert_eq!(tg('甲', '癸'), TenGod::DirectResource);
    }

    #[test]
    fn branches_resolve_by_element_and_polarity() {
        // 寅 is yang wood: peer of 甲
        assert_eq!(tg('甲', '寅'), TenGod::Peer);
        // 卯 is yin wood
        assert_eq!(tg('甲', '卯'), TenGod::Rival);
        // 亥 is yin water, and water controls fire
        assert_eq!(tg('丁', '亥'), TenGod::IndirectOfficer);
        assert_eq!(tg('丁', '子'), TenGod::DirectOfficer);
    }

    #[test]
    fn equal_element_differing_polarity_is_rival() {
        assert_eq!(ten_god(Stem::Im, Branch::Hae).unwrap(), TenGod::Rival);
        assert_eq!(ten_god(Stem::Im, Branch::Ja).unwrap(), TenGod::Peer);
    }

    /// Label from the cycle tables read directly, without `relation_to`.
    fn expected(dm: Element, target: Element, same_polarity: bool) -> TenGod {
        let pair = |first, second| if same_polarity { first } else { second };
        if dm == target {
            pair(TenGod::Peer, TenGod::Rival)
        } else if dm.generates() == target {
            pair(TenGod::Eater, TenGod::Hurter)
        } else if dm.controls() == target {
            pair(TenGod::IndirectWealth, TenGod::DirectWealth)
        } else if target.controls() == dm {
            pair(TenGod::IndirectOfficer, TenGod::DirectOfficer)
        } else if target.generates() == dm {
            pair(TenGod::IndirectResource, TenGod::DirectResource)
        } else {
            panic!("{dm:?} and {target:?} unrelated")
        }
    }

    #[test]
    fn every_stem_against_every_symbol() {
        let symbols: Vec<Symbol> = ALL_STEMS
            .iter()
            .map(|&s| Symbol::from(s))
            .chain(ALL_BRANCHES.iter().map(|&b| Symbol::from(b)))
            .collect();
        assert_eq!(symbols.len(), 22);

        for dm in ALL_STEMS {
            for &target in &symbols {
                let got = ten_god(dm, target).unwrap();
                if target == Symbol::Stem(dm) {
                    assert_eq!(got, TenGod::DayMaster);
                    continue;
                }
                let same_polarity = dm.polarity() == target.polarity();
                assert_eq!(
                    got,
                    expected(dm.element(), target.element(), same_polarity),
                    "{dm} vs {}",
                    target.hanja()
                );
                if dm.element() == target.element() {
                    let peer_or_rival = if same_polarity {
                        TenGod::Peer
                    } else {
                        TenGod::Rival
                    };
                    assert_eq!(got, peer_or_rival);
                }
            }
        }
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(ten_god_of_chars('子', '甲'), Err(SajuError::InvalidSymbol('子')));
        assert_eq!(ten_god_of_chars('甲', 'Z'), Err(SajuError::InvalidSymbol('Z')));
    }

    #[test]
    fn labels() {
        assert_eq!(TenGod::DayMaster.label(), "일원(본인)");
        assert_eq!(TenGod::DirectResource.to_string(), "정인");
        assert_eq!(ALL_TEN_GODS.len(), 11);
    }
}
