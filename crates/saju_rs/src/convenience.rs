use chrono::NaiveDateTime;
use saju_base::{BirthInput, CalendarError, Gender, SajuChart, compute_chart};
use saju_time::{SystemClock, WallClock};

use crate::error::SajuRsError;
use crate::global::calendar;
use crate::request::SajuRequest;

/// Chart for a solar birth instant, read against the host's local time.
pub fn calculate_saju(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    gender: Gender,
) -> Result<SajuChart, SajuRsError> {
    calculate_saju_with_clock(year, month, day, hour, minute, gender, &SystemClock)
}

/// Like [`calculate_saju`], with "now" read once from `clock`.
///
/// The reading is used as local civil time unchanged; the configured UTC
/// offset only applies when it is turned into astronomical time.
pub fn calculate_saju_with_clock<C: WallClock + ?Sized>(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    gender: Gender,
    clock: &C,
) -> Result<SajuChart, SajuRsError> {
    calculate_saju_at(year, month, day, hour, minute, gender, clock.now())
}

/// Chart for a solar birth instant, with ages, current luck period and
/// daily fortune taken at `reference`.
pub fn calculate_saju_at(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    gender: Gender,
    reference: NaiveDateTime,
) -> Result<SajuChart, SajuRsError> {
    let birth = BirthInput::new(year, month, day, hour, minute)?;
    Ok(compute_chart(calendar(), &birth, gender, reference)?)
}

/// Chart for a form request. Lunar dates are converted first.
pub fn calculate_saju_for(
    request: &SajuRequest,
    reference: NaiveDateTime,
) -> Result<SajuChart, SajuRsError> {
    let (hour, minute) = request.birth_time()?;
    let (year, month, day) = request.solar_ymd(calendar())?;
    calculate_saju_at(year, month, day, hour, minute, request.gender, reference)
}

/// Leap month of a lunar year, 0 when the year has none.
pub fn leap_month_for_year(year: i32) -> Result<u32, SajuRsError> {
    Ok(calendar().leap_month(year)?)
}

/// Valid day numbers of a lunar month; empty when the month does not exist.
pub fn valid_lunar_days(year: i32, month: u32, leap: bool) -> Vec<u32> {
    match calendar().days_in_month(year, month, leap) {
        Ok(days) => (1..=days).collect(),
        Err(e @ (CalendarError::LeapMonthNotFound { .. }
        | CalendarError::WrongMonth(_)
        | CalendarError::WrongYear(_))) => {
            tracing::debug!(year, month, leap, error = %e, "no such lunar month");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(year, month, leap, error = %e, "lunar month lookup failed");
            Vec::new()
        }
    }
}
