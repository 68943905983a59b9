//! Four-pillars (사주) chart calculations on top of a calendar oracle.
//!
//! This crate provides:
//! - Stem, branch, element and polarity tables with display colours
//! - Pillar construction and the sixty-pair cycle
//! - Ten-God classification against the day master
//! - Five-element distribution with excess/deficiency guidance
//! - Peach Blossom, Travelling Horse and Art Canopy detection
//! - The ten-year luck timeline, ages, and current-period lookup
//! - The daily fortune for a reference instant
//!
//! Nothing here does astronomy. Solar terms, lunar months and the luck
//! start age are supplied by a [`CalendarOracle`].

pub mod age;
pub mod branch;
pub mod chart;
pub mod color;
pub mod daily;
pub mod element;
pub mod element_analysis;
pub mod error;
pub mod input;
pub mod luck;
pub mod oracle;
pub mod pillar;
pub mod saju;
pub mod shensha;
pub mod stem;
pub mod symbol;
pub mod ten_god;

pub use age::{Ages, international_age, resolve_ages};
pub use branch::{ALL_BRANCHES, Branch, TrineGroup};
pub use chart::{
    ALL_POSITIONS, ChartTenGods, FourPillarChart, PillarPosition, PillarTenGods, chart_ten_gods,
};
pub use color::Rgb;
pub use daily::{DailyFortune, compose_daily_fortune, daily_fortune};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Polarity};
pub use element_analysis::{
    ElementCounts, ElementDistribution, analyze_elements, distribution_from_counts,
    tally_characters,
};
pub use error::{CalendarError, SajuError};
pub use input::{BirthFields, BirthInput};
pub use luck::{
    LUCK_PERIODS_REQUESTED, LUCK_TIMELINE_LEN, LuckPillarEntry, build_luck_timeline,
    current_period_index,
};
pub use oracle::{CalendarOracle, Gender, LunarDate, OracleChart, RawLuckPeriod, RawPillar};
pub use pillar::Pillar;
pub use saju::{SajuChart, compute_chart};
pub use shensha::{ALL_SHENSHA, DetectionBase, ShenshaKind, ShenshaRecord, detect_by_base, detect_shensha};
pub use stem::{ALL_STEMS, Stem};
pub use symbol::Symbol;
pub use ten_god::{ALL_TEN_GODS, TenGod, ten_god, ten_god_of_chars};
