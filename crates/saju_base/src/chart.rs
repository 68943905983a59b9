//! The four-pillar chart and its Ten-God table.

use serde::Serialize;

use crate::error::SajuError;
use crate::pillar::Pillar;
use crate::stem::Stem;
use crate::symbol::Symbol;
use crate::ten_god::{TenGod, ten_god};

/// Position of a pillar within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// Positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// Korean name of the pillar, e.g. "연주".
    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "연주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

/// Year, month, day and hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FourPillarChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillarChart {
    /// Assemble a chart from its four pillars, year first.
    pub fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// The day stem (일간).
    pub fn day_master(&self) -> Stem {
        self.day.stem()
    }

    /// Pillar at `position`.
    pub fn pillar(&self, position: PillarPosition) -> &Pillar {
        match position {
            PillarPosition::Year => &self.year,
            PillarPosition::Month => &self.month,
            PillarPosition::Day => &self.day,
            PillarPosition::Hour => &self.hour,
        }
    }

    /// Pillars paired with their positions, in chart order.
    pub fn pillars(&self) -> impl Iterator<Item = (PillarPosition, &Pillar)> {
        ALL_POSITIONS.into_iter().map(move |p| (p, self.pillar(p)))
    }

    /// The eight characters: stem then branch of each pillar, year to hour.
    pub fn characters(&self) -> [Symbol; 8] {
        let mut out = [Symbol::Stem(self.year.stem()); 8];
        for (i, (_, p)) in self.pillars().enumerate() {
            out[2 * i] = Symbol::Stem(p.stem());
            out[2 * i + 1] = Symbol::Branch(p.branch());
        }
        out
    }
}

/// Ten-God labels for the stem and branch of one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarTenGods {
    pub stem: TenGod,
    pub branch: TenGod,
}

/// Ten-God labels for the whole chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartTenGods {
    pub year: PillarTenGods,
    pub month: PillarTenGods,
    pub day: PillarTenGods,
    pub hour: PillarTenGods,
}

impl ChartTenGods {
    /// Ten gods of the pillar at `position`.
    pub fn get(&self, position: PillarPosition) -> &PillarTenGods {
        match position {
            PillarPosition::Year => &self.year,
            PillarPosition::Month => &self.month,
            PillarPosition::Day => &self.day,
            PillarPosition::Hour => &self.hour,
        }
    }
}

/// Label every character of the chart against its day master.
///
/// The day stem is always [`TenGod::DayMaster`]; any other stem equal to
/// the day master resolves to the same label.
pub fn chart_ten_gods(chart: &FourPillarChart) -> Result<ChartTenGods, SajuError> {
    let dm = chart.day_master();
    let of = |p: &Pillar| -> Result<PillarTenGods, SajuError> {
        Ok(PillarTenGods {
            stem: ten_god(dm, p.stem())?,
            branch: ten_god(dm, p.branch())?,
        })
    };
    Ok(ChartTenGods {
        year: of(&chart.year)?,
        month: of(&chart.month)?,
        day: PillarTenGods {
            stem: TenGod::DayMaster,
            branch: ten_god(dm, chart.day.branch())?,
        },
        hour: of(&chart.hour)?,
    })
}
