//! Calendar oracle contract.
//!
//! Everything astronomical (solar terms, new moons, the sexagenary day
//! count, luck-period direction and start age) sits behind this trait.
//! The chart logic consumes only characters, ages and date strings.

use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Gender, which sets the direction of the luck timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// A raw stem/branch pair as characters, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPillar {
    pub stem: char,
    pub branch: char,
}

impl RawPillar {
    /// Pillar from its stem and branch characters, unvalidated.
    pub const fn new(stem: char, branch: char) -> Self {
        Self { stem, branch }
    }
}

/// The oracle's reading of one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleChart {
    pub year: RawPillar,
    pub month: RawPillar,
    pub day: RawPillar,
    pub hour: RawPillar,
    /// Solar date-time rendering, `YYYY-MM-DD HH:MM:SS`.
    pub solar_date: String,
    /// Lunar date rendering.
    pub lunar_date: String,
}

/// One luck period as produced by the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLuckPeriod {
    /// Two-character ganzhi, or empty for the pre-luck placeholder.
    pub ganzhi: String,
    /// Start age in traditional Korean reckoning.
    pub start_age: u32,
}

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Whether `month` is the intercalary repeat.
    pub leap: bool,
}

impl LunarDate {
    /// Lunar date; `leap` marks the intercalary copy of `month`.
    pub const fn new(year: i32, month: u32, day: u32, leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            leap,
        }
    }

    /// Build from a signed month, where a negative month marks the leap month.
    pub fn from_signed(year: i32, signed_month: i32, day: u32) -> Result<Self, CalendarError> {
        if signed_month == 0 {
            return Err(CalendarError::WrongMonth(0));
        }
        Ok(Self::new(
            year,
            signed_month.unsigned_abs(),
            day,
            signed_month < 0,
        ))
    }

    /// Month with the leap sign applied.
    pub fn signed_month(&self) -> i32 {
        let m = i32::try_from(self.month).unwrap_or(i32::MAX);
        if self.leap { -m } else { m }
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let leap = if self.leap { "윤" } else { "" };
        write!(f, "{}년 {}{}월 {}일", self.year, leap, self.month, self.day)
    }
}

/// Source of pillars, luck periods and lunar conversions.
pub trait CalendarOracle {
    /// Four raw pillars and date renderings for a local civil instant.
    fn eight_char(&self, at: NaiveDateTime) -> Result<OracleChart, CalendarError>;

    /// The first `count` luck periods for a birth instant.
    ///
    /// The first entry is the pre-luck placeholder with empty ganzhi.
    fn luck_periods(
        &self,
        at: NaiveDateTime,
        gender: Gender,
        count: usize,
    ) -> Result<Vec<RawLuckPeriod>, CalendarError>;

    /// Solar date of a lunar date.
    fn lunar_to_solar(&self, date: LunarDate) -> Result<NaiveDate, CalendarError>;
}
