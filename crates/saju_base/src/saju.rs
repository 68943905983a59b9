//! Full chart assembly.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::age::{Ages, resolve_ages};
use crate::chart::{ChartTenGods, FourPillarChart, chart_ten_gods};
use crate::daily::{DailyFortune, daily_fortune};
use crate::element_analysis::{ElementDistribution, analyze_elements};
use crate::error::SajuError;
use crate::input::BirthInput;
use crate::luck::{LUCK_PERIODS_REQUESTED, LuckPillarEntry, build_luck_timeline, current_period_index};
use crate::oracle::{CalendarOracle, Gender, RawPillar};
use crate::pillar::Pillar;
use crate::shensha::{ShenshaRecord, detect_shensha};
use crate::stem::Stem;

/// Everything derived from one birth instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SajuChart {
    pub solar_date: String,
    pub lunar_date: String,
    pub gender: Gender,
    pub pillars: FourPillarChart,
    pub day_master: Stem,
    pub ten_gods: ChartTenGods,
    pub elements: ElementDistribution,
    pub shensha: Vec<ShenshaRecord>,
    pub luck: Vec<LuckPillarEntry>,
    pub ages: Ages,
    /// Index into `luck` of the period containing the international age.
    pub current_luck_index: Option<usize>,
    pub daily: DailyFortune,
}

impl SajuChart {
    /// The luck period in force at the reference date, if any.
    pub fn current_luck(&self) -> Option<&LuckPillarEntry> {
        self.current_luck_index.and_then(|i| self.luck.get(i))
    }
}

fn pillar(raw: RawPillar) -> Result<Pillar, SajuError> {
    Pillar::from_chars(raw.stem, raw.branch)
}

/// Compute the chart for `birth`.
///
/// `reference` is the single "now" of the calculation: it fixes the
/// current ages, the current luck period and the daily fortune.
pub fn compute_chart<O: CalendarOracle + ?Sized>(
    oracle: &O,
    birth: &BirthInput,
    gender: Gender,
    reference: NaiveDateTime,
) -> Result<SajuChart, SajuError> {
    let reading = oracle.eight_char(birth.at())?;
    let pillars = FourPillarChart::new(
        pillar(reading.year)?,
        pillar(reading.month)?,
        pillar(reading.day)?,
        pillar(reading.hour)?,
    );
    tracing::debug!(
        birth = %birth.at(),
        year = %pillars.year,
        month = %pillars.month,
        day = %pillars.day,
        hour = %pillars.hour,
        "pillars resolved"
    );

    let ten_gods = chart_ten_gods(&pillars)?;
    let elements = analyze_elements(&pillars)?;
    let shensha = detect_shensha(&pillars);

    let raw_luck = oracle.luck_periods(birth.at(), gender, LUCK_PERIODS_REQUESTED)?;
    let luck = build_luck_timeline(&raw_luck)?;

    let ages = resolve_ages(birth.date(), reference.date());
    let current_luck_index = current_period_index(&luck, ages.international);

    let daily = daily_fortune(oracle, pillars.day_master(), pillars.day.branch(), reference)?;

    Ok(SajuChart {
        solar_date: reading.solar_date,
        lunar_date: reading.lunar_date,
        gender,
        day_master: pillars.day_master(),
        pillars,
        ten_gods,
        elements,
        shensha,
        luck,
        ages,
        current_luck_index,
        daily,
    })
}
