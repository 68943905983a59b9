//! Civil clock with a fixed UTC offset.
//!
//! Birth times are recorded as wall-clock readings without a zone. A
//! [`LocalClock`] interprets them in one fixed offset and moves between
//! that civil time and Julian Ephemeris Dates (TT) for the astronomy.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::delta_t::delta_t_seconds;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, date_to_jdn, jd_to_calendar, jdn_to_date};

/// A wall clock at a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalClock {
    utc_offset_minutes: i32,
}

impl LocalClock {
    /// Clock at the given offset from UTC, in minutes east of Greenwich.
    pub const fn new(utc_offset_minutes: i32) -> Self {
        Self { utc_offset_minutes }
    }

    /// Offset from UTC in minutes.
    pub const fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    fn offset_days(&self) -> f64 {
        self.utc_offset_minutes as f64 / 1440.0
    }

    /// Julian Date (UT) of a local civil instant.
    pub fn to_jd_ut(&self, local: NaiveDateTime) -> f64 {
        calendar_to_jd(local.year(), local.month(), day_fraction(local)) - self.offset_days()
    }

    /// Julian Ephemeris Date (TT) of a local civil instant.
    pub fn to_jde(&self, local: NaiveDateTime) -> f64 {
        self.to_jd_ut(local) + delta_t_seconds(local.year(), local.month()) / SECONDS_PER_DAY
    }

    /// Julian Ephemeris Date of local midnight starting the civil day `jdn`.
    pub fn midnight_jde(&self, jdn: i64) -> Option<f64> {
        let date = jdn_to_date(jdn)?;
        Some(self.to_jde(date.and_time(NaiveTime::MIN)))
    }

    /// Julian Date in local civil time (UT shifted by the offset) for a JDE.
    fn local_jd(&self, jde: f64) -> f64 {
        let (y, m, _) = jd_to_calendar(jde);
        jde - delta_t_seconds(y, m) / SECONDS_PER_DAY + self.offset_days()
    }

    /// Local civil instant of a JDE, rounded to the second.
    pub fn to_local(&self, jde: f64) -> Option<NaiveDateTime> {
        let (y, m, d) = jd_to_calendar(self.local_jd(jde));
        let whole = d.floor();
        let secs = ((d - whole) * SECONDS_PER_DAY).round() as i64;
        let date = NaiveDate::from_ymd_opt(y, m, whole as u32)?;
        date.and_time(NaiveTime::MIN).checked_add_signed(Duration::seconds(secs))
    }

    /// Julian Day Number of the local civil date containing a JDE.
    pub fn local_jdn(&self, jde: f64) -> i64 {
        (self.local_jd(jde) + 0.5).floor() as i64
    }

    /// Julian Day Number of the civil date of a local instant.
    pub fn jdn_of(&self, local: NaiveDateTime) -> i64 {
        date_to_jdn(local.date())
    }
}

/// Source of the current wall-clock reading.
pub trait WallClock {
    /// Current local civil time, truncated to the minute.
    fn now(&self) -> NaiveDateTime;
}

/// The host's local clock, read as-is.
///
/// The reading is not shifted to the calendar's UTC offset: "today" is
/// whatever date the machine shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        truncate_to_minute(Local::now().naive_local())
    }
}

/// A clock stuck at one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl WallClock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        truncate_to_minute(self.0)
    }
}

/// Drop seconds and sub-second parts.
pub fn truncate_to_minute(t: NaiveDateTime) -> NaiveDateTime {
    t.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}

fn day_fraction(t: NaiveDateTime) -> f64 {
    t.day() as f64
        + t.hour() as f64 / 24.0
        + t.minute() as f64 / 1440.0
        + t.second() as f64 / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn utc_clock_j2000_ut() {
        let clock = LocalClock::new(0);
        let jd = clock.to_jd_ut(dt(2000, 1, 1, 12, 0));
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn offset_shifts_by_hours() {
        let utc = LocalClock::new(0).to_jd_ut(dt(2020, 2, 4, 10, 0));
        let cst = LocalClock::new(480).to_jd_ut(dt(2020, 2, 4, 18, 0));
        assert!((utc - cst).abs() < 1e-9);
    }

    #[test]
    fn local_roundtrip_to_the_second() {
        let clock = LocalClock::new(480);
        let t = dt(1981, 1, 29, 23, 37);
        let back = clock.to_local(clock.to_jde(t)).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn local_jdn_follows_offset() {
        let clock = LocalClock::new(480);
        // 23:30 local is still the same civil day
        let late = clock.to_jde(dt(2020, 2, 4, 23, 30));
        assert_eq!(clock.local_jdn(late), clock.jdn_of(dt(2020, 2, 4, 0, 0)));
        let early = clock.to_jde(dt(2020, 2, 5, 0, 10));
        assert_eq!(clock.local_jdn(early), clock.jdn_of(dt(2020, 2, 5, 0, 0)));
    }

    #[test]
    fn fixed_clock_keeps_wall_date() {
        let t = NaiveDate::from_ymd_opt(2026, 2, 20)
            .unwrap()
            .and_hms_opt(0, 30, 42)
            .unwrap();
        assert_eq!(FixedClock(t).now(), dt(2026, 2, 20, 0, 30));
    }

    #[test]
    fn system_clock_matches_host_local_time() {
        let before = truncate_to_minute(Local::now().naive_local());
        let got = SystemClock.now();
        let after = Local::now().naive_local();
        assert!(got >= before && got <= after, "{before} <= {got} <= {after}");
        assert_eq!(got.second(), 0);
    }

    #[test]
    fn midnight_jde_is_start_of_day() {
        let clock = LocalClock::new(540);
        let jdn = clock.jdn_of(dt(2024, 2, 10, 0, 0));
        let jde = clock.midnight_jde(jdn).unwrap();
        assert_eq!(clock.to_local(jde).unwrap(), dt(2024, 2, 10, 0, 0));
    }
}
