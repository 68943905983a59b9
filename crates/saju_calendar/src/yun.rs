//! Luck periods (대운): direction, start age, and the ten-year pillars.
//!
//! The luck cycle runs forward from the month pillar for a yang-year male
//! or a yin-year female, backward otherwise. The start offset is the span
//! from birth to the next 절 (forward) or from the previous 절 to birth
//! (backward), counted in two-hour periods and days. Three days count as
//! one year and one day as four months; each two-hour period adds ten days.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Timelike};
use saju_base::{CalendarError, Gender, Pillar, Polarity, RawLuckPeriod};
use saju_config::LateZiHour;
use saju_time::LocalClock;

use crate::eight_char::{EightChar, eight_char, hour_branch_index};
use crate::solar_term::{IPCHUN_LONGITUDE, next_crossing, prev_crossing};
use crate::sun::normalize_deg;

/// Offset from birth to the first luck period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckStart {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub forward: bool,
}

/// Two-hour period index used for the start count; 23:00 counts as the last.
fn period_index(t: NaiveDateTime) -> i64 {
    if t.hour() == 23 {
        11
    } else {
        hour_branch_index(t.hour()) as i64
    }
}

fn out_of_range(at: NaiveDateTime) -> CalendarError {
    CalendarError::OutOfRange(at.to_string())
}

/// Whether the luck cycle runs forward for a year polarity and gender.
pub fn runs_forward(year_polarity: Polarity, gender: Gender) -> bool {
    matches!(
        (year_polarity, gender),
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female)
    )
}

/// Start offset between two civil instants, `start` before `end`.
pub fn start_offset(start: NaiveDateTime, end: NaiveDateTime, forward: bool) -> LuckStart {
    let mut hour_diff = period_index(end) - period_index(start);
    let mut day_diff = (end.date() - start.date()).num_days();
    if hour_diff < 0 {
        hour_diff += 12;
        day_diff -= 1;
    }
    let month_diff = hour_diff * 10 / 30;
    let total_months = (day_diff * 4 + month_diff).max(0);
    let days = hour_diff * 10 - month_diff * 30;
    LuckStart {
        years: (total_months / 12) as u32,
        months: (total_months % 12) as u32,
        days: days as u32,
        forward,
    }
}

/// Civil date on which the first luck period begins.
pub fn start_date(birth: NaiveDate, offset: &LuckStart) -> Option<NaiveDate> {
    birth
        .checked_add_months(Months::new(offset.years * 12))?
        .checked_add_months(Months::new(offset.months))?
        .checked_add_days(Days::new(u64::from(offset.days)))
}

/// Luck start for a birth instant.
pub fn luck_start(
    clock: &LocalClock,
    late_zi: LateZiHour,
    at: NaiveDateTime,
    gender: Gender,
) -> Result<LuckStart, CalendarError> {
    let ec = eight_char(clock, late_zi, at)?;
    start_from(clock, &ec, at, gender)
}

fn start_from(
    clock: &LocalClock,
    ec: &EightChar,
    at: NaiveDateTime,
    gender: Gender,
) -> Result<LuckStart, CalendarError> {
    let forward = runs_forward(ec.year.stem().polarity(), gender);
    let m = ec.month_offset as f64;
    let (start, end) = if forward {
        let next = next_crossing(normalize_deg(IPCHUN_LONGITUDE + 30.0 * (m + 1.0)), ec.jde);
        (at, clock.to_local(next).ok_or_else(|| out_of_range(at))?)
    } else {
        let prev = prev_crossing(normalize_deg(IPCHUN_LONGITUDE + 30.0 * m), ec.jde);
        (clock.to_local(prev).ok_or_else(|| out_of_range(at))?, at)
    };
    let offset = start_offset(start, end, forward);
    tracing::debug!(
        at = %at,
        forward,
        from = %start,
        to = %end,
        years = offset.years,
        months = offset.months,
        days = offset.days,
        "luck start"
    );
    Ok(offset)
}

/// `count` luck periods: a placeholder at age 1, then one pillar per decade.
pub fn luck_periods(
    clock: &LocalClock,
    late_zi: LateZiHour,
    at: NaiveDateTime,
    gender: Gender,
    count: usize,
) -> Result<Vec<RawLuckPeriod>, CalendarError> {
    let ec = eight_char(clock, late_zi, at)?;
    let offset = start_from(clock, &ec, at, gender)?;
    let first = start_date(at.date(), &offset).ok_or_else(|| out_of_range(at))?;
    let month_index = ec
        .month
        .sexagenary_index()
        .ok_or_else(|| out_of_range(at))? as i64;

    let periods = (0..count)
        .map(|i| {
            if i == 0 {
                return RawLuckPeriod {
                    ganzhi: String::new(),
                    start_age: 1,
                };
            }
            let step = i as i64;
            let index = if offset.forward {
                month_index + step
            } else {
                month_index - step
            };
            let start_year = first.year() + (i as i32 - 1) * 10;
            RawLuckPeriod {
                ganzhi: Pillar::from_sexagenary(index.rem_euclid(60) as usize).to_string(),
                start_age: (start_year - at.year() + 1).max(1) as u32,
            }
        })
        .collect();
    Ok(periods)
}
