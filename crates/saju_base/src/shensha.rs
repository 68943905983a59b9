//! Special stars (신살): Peach Blossom, Travelling Horse, Art Canopy.
//!
//! Each star is keyed on the trine group of a base branch. The detector
//! runs once from the year branch and once from the day branch; a star
//! found from both is reported once, worded from the year base.

use serde::Serialize;

use crate::branch::{Branch, TrineGroup};
use crate::chart::{ALL_POSITIONS, FourPillarChart, PillarPosition};

/// One of the three detected stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShenshaKind {
    /// 도화살
    PeachBlossom,
    /// 역마살
    TravelHorse,
    /// 화개살
    ArtCanopy,
}

/// Stars in detection order.
pub const ALL_SHENSHA: [ShenshaKind; 3] = [
    ShenshaKind::PeachBlossom,
    ShenshaKind::TravelHorse,
    ShenshaKind::ArtCanopy,
];

impl ShenshaKind {
    /// Korean display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PeachBlossom => "도화살",
            Self::TravelHorse => "역마살",
            Self::ArtCanopy => "화개살",
        }
    }

    const fn phrase(self) -> &'static str {
        match self {
            Self::PeachBlossom => "도화 기운으로",
            Self::TravelHorse => "역마 기운으로",
            Self::ArtCanopy => "화개 기운으로",
        }
    }

    const fn text(self) -> &'static str {
        match self {
            Self::PeachBlossom => "대중의 관심을 끄는 매력이 있습니다.",
            Self::TravelHorse => "이동과 변화에 강한 흐름이 있습니다.",
            Self::ArtCanopy => "몰입과 사색, 예술적 감수성이 두드러집니다.",
        }
    }

    /// Branch that triggers this star for a base in `group`.
    pub const fn target(self, group: TrineGroup) -> Branch {
        match (group, self) {
            (TrineGroup::Water, Self::PeachBlossom) => Branch::Yu,
            (TrineGroup::Water, Self::TravelHorse) => Branch::In,
            (TrineGroup::Water, Self::ArtCanopy) => Branch::Jin,
            (TrineGroup::Fire, Self::PeachBlossom) => Branch::Myo,
            (TrineGroup::Fire, Self::TravelHorse) => Branch::Sin,
            (TrineGroup::Fire, Self::ArtCanopy) => Branch::Sul,
            (TrineGroup::Metal, Self::PeachBlossom) => Branch::O,
            (TrineGroup::Metal, Self::TravelHorse) => Branch::Hae,
            (TrineGroup::Metal, Self::ArtCanopy) => Branch::Chuk,
            (TrineGroup::Wood, Self::PeachBlossom) => Branch::Ja,
            (TrineGroup::Wood, Self::TravelHorse) => Branch::Sa,
            (TrineGroup::Wood, Self::ArtCanopy) => Branch::Mi,
        }
    }
}

impl Serialize for ShenshaKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Which chart branch served as the base of a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionBase {
    Year,
    Day,
}

impl DetectionBase {
    /// Korean label, "연지" or "일지".
    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "연지",
            Self::Day => "일지",
        }
    }
}

/// A detected star.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShenshaRecord {
    /// Pillar whose branch matched the target.
    pub position: PillarPosition,
    pub kind: ShenshaKind,
    pub base: DetectionBase,
    pub description: String,
}

/// Stars triggered from one base branch, in star order.
///
/// For each star the positions are scanned year to hour and the first
/// matching branch is reported.
pub fn detect_by_base(
    base_branch: Branch,
    base: DetectionBase,
    chart: &FourPillarChart,
) -> Vec<ShenshaRecord> {
    let group = base_branch.trine();
    ALL_SHENSHA
        .into_iter()
        .filter_map(|kind| {
            let target = kind.target(group);
            ALL_POSITIONS
                .into_iter()
                .find(|&p| chart.pillar(p).branch() == target)
                .map(|position| ShenshaRecord {
                    position,
                    kind,
                    base,
                    description: format!("{} 기준 {} {}", base.label(), kind.phrase(), kind.text()),
                })
        })
        .collect()
}

/// Year-based stars followed by day-based stars not already present.
pub fn detect_shensha(chart: &FourPillarChart) -> Vec<ShenshaRecord> {
    let mut merged = detect_by_base(chart.year.branch(), DetectionBase::Year, chart);
    for record in detect_by_base(chart.day.branch(), DetectionBase::Day, chart) {
        if !merged.iter().any(|r| r.kind == record.kind) {
            merged.push(record);
        }
    }
    merged
}
