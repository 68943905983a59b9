//! Year, month, day and hour pillars of a civil instant.
//!
//! - Year: turns at 입춘; index `(year − 4) mod 60`.
//! - Month: solar month from the 절 boundaries; 寅 month opens at 315°.
//!   The stem follows the year stem (甲/己 years start at 丙寅).
//! - Day: `(JDN + 49) mod 60` of the civil date.
//! - Hour: two-hour branches with 子 spanning 23:00–00:59; the stem
//!   follows the day stem (甲/己 days start at 甲子).

use chrono::{Datelike, NaiveDateTime, Timelike};
use saju_base::{Branch, CalendarError, Pillar, Stem};
use saju_config::LateZiHour;
use saju_time::{LocalClock, date_to_jdn};

use crate::solar_term::IPCHUN_LONGITUDE;
use crate::sun::{apparent_longitude, normalize_deg};

/// The four pillars of an instant plus the solar month used for luck periods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EightChar {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Solar month ordinal, 0 = 寅 month .. 11 = 丑 month.
    pub month_offset: usize,
    /// Julian Ephemeris Date of the instant.
    pub jde: f64,
}

/// Sexagenary day index of a Julian Day Number.
pub fn day_index(jdn: i64) -> usize {
    (jdn + 49).rem_euclid(60) as usize
}

/// Hour branch index for a clock hour.
pub fn hour_branch_index(hour: u32) -> usize {
    (((hour + 1) / 2) % 12) as usize
}

/// Solar year (입춘 to 입춘) of a civil instant, given its solar month.
///
/// January and February instants in the 子 or 丑 month still belong to
/// the previous solar year.
fn solar_year(at: NaiveDateTime, month_offset: usize) -> i32 {
    if at.month() <= 2 && month_offset >= 10 {
        at.year() - 1
    } else {
        at.year()
    }
}

/// Compute the eight characters of a local civil instant.
pub fn eight_char(
    clock: &LocalClock,
    late_zi: LateZiHour,
    at: NaiveDateTime,
) -> Result<EightChar, CalendarError> {
    let jde = clock.to_jde(at);

    // year and month both follow from this one longitude reading
    let from_ipchun = normalize_deg(apparent_longitude(jde) - IPCHUN_LONGITUDE);
    let offset = (from_ipchun / 30.0).floor() as usize % 12;
    let year_index = (solar_year(at, offset) - 4).rem_euclid(60) as usize;
    let year = Pillar::from_sexagenary(year_index);

    let month_stem = Stem::from_index((year.stem().index() % 5) * 2 + 2 + offset);
    let month = Pillar::new(month_stem, Branch::from_index(offset + 2));

    let jdn = date_to_jdn(at.date());
    let late = at.hour() == 23;
    let day_jdn = if late && late_zi == LateZiHour::NextDay {
        jdn + 1
    } else {
        jdn
    };
    let day = Pillar::from_sexagenary(day_index(day_jdn));

    // from 23:00 the hour stem already counts from the next day
    let stem_source = if late {
        Pillar::from_sexagenary(day_index(jdn + 1)).stem()
    } else {
        day.stem()
    };
    let branch = hour_branch_index(at.hour());
    let hour = Pillar::new(
        Stem::from_index((stem_source.index() % 5) * 2 + branch),
        Branch::from_index(branch),
    );

    tracing::debug!(
        at = %at,
        year = %year,
        month = %month,
        day = %day,
        hour = %hour,
        "eight characters"
    );

    Ok(EightChar {
        year,
        month,
        day,
        hour,
        month_offset: offset,
        jde,
    })
}
