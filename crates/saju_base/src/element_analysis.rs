//! Five-element distribution of a chart and its balance verdict.

use serde::Serialize;

use crate::chart::FourPillarChart;
use crate::element::{ALL_ELEMENTS, Element};
use crate::error::SajuError;
use crate::symbol::Symbol;

/// Count at or above which an element reads as excessive.
pub const EXCESSIVE_THRESHOLD: u8 = 3;

const BALANCED_MESSAGE: &str =
    "오행 분포가 비교적 고르게 나타납니다. 현재의 생활 리듬을 안정적으로 유지해 보세요.";

const EXCESSIVE_GUIDE: [&str; 5] = [
    "성장 속도를 조절하고 우선순위를 나눠 추진해 보세요.",
    "속도를 조절하고 휴식을 챙기면 집중력이 오래갑니다.",
    "고정된 루틴에 여유를 더해 유연성을 유지해 보세요.",
    "완성도 기준을 유지하되 타이밍을 놓치지 않는 결정을 의식해 보세요.",
    "생각이 깊어지는 만큼 실행 시점을 짧게 끊어 관리해 보세요.",
];

const DEFICIENT_GUIDE: [&str; 5] = [
    "새로운 시도와 학습 시간을 주기적으로 확보해 보세요.",
    "감정 표현과 관계 소통을 의식적으로 늘려 보세요.",
    "기초 체력과 생활 리듬을 먼저 안정화해 보세요.",
    "기준 정리와 마감 습관을 강화하면 성과가 선명해집니다.",
    "정리와 회복 루틴을 의식적으로 보완해 보세요.",
];

/// Per-element character counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElementCounts {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementCounts {
    /// Count for one element.
    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn bump(&mut self, element: Element) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot += 1;
    }

    /// Sum over all five elements.
    pub fn total(&self) -> u32 {
        ALL_ELEMENTS.iter().map(|&e| u32::from(self.get(e))).sum()
    }
}

/// Element tally with excess/deficiency verdicts and guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementDistribution {
    pub counts: ElementCounts,
    /// Elements with count ≥ 3, in canonical order.
    pub excessive: Vec<Element>,
    /// Elements with count 0, in canonical order.
    pub deficient: Vec<Element>,
    pub messages: Vec<String>,
}

impl ElementDistribution {
    /// No element is excessive or deficient.
    pub fn is_balanced(&self) -> bool {
        self.excessive.is_empty() && self.deficient.is_empty()
    }
}

/// Tally the elements of eight hanja characters.
pub fn tally_characters(chars: &[char; 8]) -> Result<ElementCounts, SajuError> {
    let mut counts = ElementCounts::default();
    for &c in chars {
        counts.bump(Symbol::from_char(c)?.element());
    }
    Ok(counts)
}

/// Element distribution of a chart.
pub fn analyze_elements(chart: &FourPillarChart) -> Result<ElementDistribution, SajuError> {
    let chars = chart.characters().map(Symbol::hanja);
    let counts = tally_characters(&chars)?;
    Ok(distribution_from_counts(counts))
}

/// Verdicts and messages for a set of counts.
pub fn distribution_from_counts(counts: ElementCounts) -> ElementDistribution {
    let excessive: Vec<Element> = ALL_ELEMENTS
        .into_iter()
        .filter(|&e| counts.get(e) >= EXCESSIVE_THRESHOLD)
        .collect();
    let deficient: Vec<Element> = ALL_ELEMENTS
        .into_iter()
        .filter(|&e| counts.get(e) == 0)
        .collect();

    let mut messages: Vec<String> = excessive
        .iter()
        .map(|e| format!("{} 기운이 강합니다. {}", e.label(), EXCESSIVE_GUIDE[e.index()]))
        .chain(
            deficient
                .iter()
                .map(|e| format!("{} 기운이 약합니다. {}", e.label(), DEFICIENT_GUIDE[e.index()])),
        )
        .collect();
    if messages.is_empty() {
        messages.push(BALANCED_MESSAGE.to_string());
    }

    ElementDistribution {
        counts,
        excessive,
        deficient,
        messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillar::Pillar;

    fn chart(p: [&str; 4]) -> FourPillarChart {
        FourPillarChart::new(
            Pillar::from_ganzhi(p[0]).unwrap(),
            Pillar::from_ganzhi(p[1]).unwrap(),
            Pillar::from_ganzhi(p[2]).unwrap(),
            Pillar::from_ganzhi(p[3]).unwrap(),
        )
    }

    #[test]
    fn counts_sum_to_eight() {
        let d = analyze_elements(&chart(["己亥", "丁丑", "丁丑", "丁未"])).unwrap();
        assert_eq!(d.counts.total(), 8);
        // 己 丑 丑 未 earth, 丁 丁 丁 fire, 亥 water
        assert_eq!(d.counts.earth, 4);
        assert_eq!(d.counts.fire, 3);
        assert_eq!(d.counts.water, 1);
        assert_eq!(d.excessive, vec![Element::Fire, Element::Earth]);
        assert_eq!(d.deficient, vec![Element::Wood, Element::Metal]);
    }

    #[test]
    fn messages_excess_then_deficiency() {
        let d = analyze_elements(&chart(["己亥", "丁丑", "丁丑", "丁未"])).unwrap();
        assert_eq!(d.messages.len(), 4);
        assert!(d.messages[0].starts_with("화(火) 기운이 강합니다."));
        assert!(d.messages[1].starts_with("토(土) 기운이 강합니다."));
        assert!(d.messages[2].starts_with("목(木) 기운이 약합니다."));
        assert!(d.messages[3].starts_with("금(金) 기운이 약합니다."));
    }

    #[test]
    fn balanced_chart() {
        // wood 2, fire 2, earth 1, metal 2, water 1
        let counts = tally_characters(&['甲', '子', '丙', '寅', '戊', '午', '庚', '申']).unwrap();
        let d = distribution_from_counts(counts);
        assert!(d.is_balanced());
        assert_eq!(d.messages.len(), 1);
        assert!(d.messages[0].starts_with("오행 분포가 비교적 고르게"));
    }

    #[test]
    fn excessive_and_deficient_are_disjoint() {
        let d = analyze_elements(&chart(["壬子", "壬子", "壬子", "壬子"])).unwrap();
        assert_eq!(d.counts.water, 8);
        assert_eq!(d.excessive, vec![Element::Water]);
        assert_eq!(d.deficient.len(), 4);
        assert!(d.excessive.iter().all(|e| !d.deficient.contains(e)));
    }

    #[test]
    fn unknown_character_fails() {
        let r = tally_characters(&['甲', '子', '丙', '寅', '戊', '午', '庚', '?']);
        assert_eq!(r, Err(SajuError::InvalidSymbol('?')));
    }
}
