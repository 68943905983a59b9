//! [`CalendarOracle`] backed by the solar-term and lunisolar computations.

use chrono::{NaiveDate, NaiveDateTime};
use saju_base::{
    CalendarError, CalendarOracle, Gender, LunarDate, OracleChart, Pillar, RawLuckPeriod,
    RawPillar,
};
use saju_config::{LateZiHour, SajuConfig};
use saju_time::LocalClock;

use crate::eight_char::{EightChar, eight_char};
use crate::lunisolar::{LunarMonth, Lunisolar, format_lunar_date};
use crate::yun::luck_periods;

fn raw(pillar: Pillar) -> RawPillar {
    RawPillar::new(pillar.stem().hanja(), pillar.branch().hanja())
}

/// Astronomical calendar oracle for one civil clock.
#[derive(Debug, Clone, Copy)]
pub struct SolarTermCalendar {
    clock: LocalClock,
    late_zi: LateZiHour,
    lunisolar: Lunisolar,
}

impl SolarTermCalendar {
    /// Oracle for one clock, late-子 rule and supported lunar year range.
    pub fn new(
        clock: LocalClock,
        late_zi: LateZiHour,
        min_lunar_year: i32,
        max_lunar_year: i32,
    ) -> Self {
        Self {
            clock,
            late_zi,
            lunisolar: Lunisolar::new(clock, min_lunar_year, max_lunar_year),
        }
    }

    /// Build from the `calendar` section of a config.
    pub fn from_config(config: &SajuConfig) -> Self {
        let cal = &config.calendar;
        Self::new(
            LocalClock::new(cal.utc_offset_minutes),
            cal.late_zi_hour,
            cal.min_lunar_year,
            cal.max_lunar_year,
        )
    }

    /// Civil clock the pillars are computed in.
    pub fn clock(&self) -> &LocalClock {
        &self.clock
    }

    /// Day-pillar rule for births from 23:00.
    pub fn late_zi(&self) -> LateZiHour {
        self.late_zi
    }

    /// Full pillar computation, including the solar month ordinal.
    pub fn pillars(&self, at: NaiveDateTime) -> Result<EightChar, CalendarError> {
        eight_char(&self.clock, self.late_zi, at)
    }

    /// Lunar date containing the civil `date`.
    pub fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, CalendarError> {
        self.lunisolar.solar_to_lunar(date)
    }

    /// Leap month number of a lunar year, 0 if none.
    pub fn leap_month(&self, year: i32) -> Result<u32, CalendarError> {
        self.lunisolar.leap_month(year)
    }

    /// Length of a lunar month, 29 or 30.
    pub fn days_in_month(&self, year: i32, month: u32, leap: bool) -> Result<u32, CalendarError> {
        self.lunisolar.days_in_month(year, month, leap)
    }

    /// Months of a lunar year in order, leap month included.
    pub fn months_of_year(&self, year: i32) -> Result<Vec<LunarMonth>, CalendarError> {
        self.lunisolar.months_of_year(year)
    }
}

impl Default for SolarTermCalendar {
    fn default() -> Self {
        Self::from_config(&SajuConfig::default())
    }
}

impl CalendarOracle for SolarTermCalendar {
    fn eight_char(&self, at: NaiveDateTime) -> Result<OracleChart, CalendarError> {
        let ec = self.pillars(at)?;
        let lunar = self.lunisolar.solar_to_lunar(at.date())?;
        Ok(OracleChart {
            year: raw(ec.year),
            month: raw(ec.month),
            day: raw(ec.day),
            hour: raw(ec.hour),
            solar_date: at.format("%Y-%m-%d %H:%M:%S").to_string(),
            lunar_date: format_lunar_date(&lunar),
        })
    }

    fn luck_periods(
        &self,
        at: NaiveDateTime,
        gender: Gender,
        count: usize,
    ) -> Result<Vec<RawLuckPeriod>, CalendarError> {
        luck_periods(&self.clock, self.late_zi, at, gender, count)
    }

    fn lunar_to_solar(&self, date: LunarDate) -> Result<NaiveDate, CalendarError> {
        self.lunisolar.lunar_to_solar(date)
    }
}
