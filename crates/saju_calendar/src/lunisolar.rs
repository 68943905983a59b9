//! Chinese-rule lunisolar calendar.
//!
//! Months begin on the local civil date of a new moon. The month holding
//! the winter solstice is month 11. A solstice-to-solstice span ("sui")
//! with 13 new moons has one leap month: the first month after month 11
//! in which the Sun enters no new 30° sign (no zhongqi). The lunar year
//! turns at month 1.

use chrono::{Datelike, NaiveDate, NaiveTime};
use saju_base::{CalendarError, LunarDate};
use saju_time::{LocalClock, date_to_jdn, jdn_to_date};

use crate::moon_phase::{SYNODIC_MONTH_DAYS, lunation_near, new_moon_jde};
use crate::solar_term::{DONGJI_LONGITUDE, next_crossing};
use crate::sun::apparent_longitude;

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

const DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一", "十二",
    "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三", "廿四",
    "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// One lunar month with its civil span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    /// Lunar year the month belongs to.
    pub year: i32,
    pub month: u32,
    pub leap: bool,
    /// Julian Day Number of day 1.
    pub start_jdn: i64,
    /// 29 or 30.
    pub days: u32,
}

impl LunarMonth {
    fn contains(&self, jdn: i64) -> bool {
        jdn >= self.start_jdn && jdn < self.start_jdn + i64::from(self.days)
    }
}

/// Month of a sui before year labels are assigned.
#[derive(Debug, Clone, Copy)]
struct SuiMonth {
    month: u32,
    leap: bool,
    start_jdn: i64,
    days: u32,
}

/// Lunisolar calendar for one civil offset.
#[derive(Debug, Clone, Copy)]
pub struct Lunisolar {
    clock: LocalClock,
    min_year: i32,
    max_year: i32,
}

impl Lunisolar {
    /// Lunisolar calendar for `clock`, supporting lunar years `min_year..=max_year`.
    pub fn new(clock: LocalClock, min_year: i32, max_year: i32) -> Self {
        Self {
            clock,
            min_year,
            max_year,
        }
    }

    fn new_moon_jdn(&self, k: i64) -> i64 {
        self.clock.local_jdn(new_moon_jde(k))
    }

    /// Lunation whose new moon falls on or before civil day `jdn`.
    fn lunation_on_or_before(&self, jdn: i64) -> i64 {
        let mut k = lunation_near(jdn as f64 - 0.5 * SYNODIC_MONTH_DAYS);
        while self.new_moon_jdn(k) > jdn {
            k -= 1;
        }
        while self.new_moon_jdn(k + 1) <= jdn {
            k += 1;
        }
        k
    }

    /// Civil day of the winter solstice of Gregorian `year`.
    fn dongji_jdn(&self, year: i32) -> Result<i64, CalendarError> {
        let dec1 = NaiveDate::from_ymd_opt(year, 12, 1)
            .ok_or_else(|| CalendarError::OutOfRange(format!("year {year}")))?;
        let jde = next_crossing(DONGJI_LONGITUDE, self.clock.to_jde(dec1.and_time(NaiveTime::MIN)));
        Ok(self.clock.local_jdn(jde))
    }

    /// Solar-sign index (0..12) at local midnight opening civil day `jdn`.
    fn sign_at(&self, jdn: i64) -> Result<i64, CalendarError> {
        let jde = self
            .clock
            .midnight_jde(jdn)
            .ok_or_else(|| CalendarError::OutOfRange(format!("JDN {jdn}")))?;
        Ok((apparent_longitude(jde) / 30.0).floor() as i64)
    }

    /// Months from month 11 before the solstice of `year - 1` up to, not
    /// including, month 11 before the solstice of `year`.
    fn sui(&self, year: i32) -> Result<Vec<SuiMonth>, CalendarError> {
        let first = self.lunation_on_or_before(self.dongji_jdn(year - 1)?);
        let last = self.lunation_on_or_before(self.dongji_jdn(year)?);
        let starts: Vec<i64> = (first..=last).map(|k| self.new_moon_jdn(k)).collect();
        let has_leap = last - first == 13;

        let mut months = Vec::with_capacity(starts.len());
        let mut number = 11;
        let mut leap_taken = false;
        for (i, span) in starts.windows(2).enumerate() {
            let (start, end) = (span[0], span[1]);
            let days = (end - start) as u32;
            if i == 0 {
                months.push(SuiMonth {
                    month: 11,
                    leap: false,
                    start_jdn: start,
                    days,
                });
                continue;
            }
            let has_zhongqi = self.sign_at(start)? != self.sign_at(end)?;
            let leap = has_leap && !leap_taken && !has_zhongqi;
            if leap {
                leap_taken = true;
            } else {
                number = number % 12 + 1;
            }
            months.push(SuiMonth {
                month: number,
                leap,
                start_jdn: start,
                days,
            });
        }
        tracing::trace!(year, months = months.len(), has_leap, "sui computed");
        Ok(months)
    }

    /// Attach lunar years to a sui: months before month 1 belong to the
    /// previous lunar year.
    fn label(sui: &[SuiMonth], year: i32) -> impl Iterator<Item = LunarMonth> + '_ {
        let mut current = year - 1;
        sui.iter().map(move |m| {
            if m.month == 1 && !m.leap {
                current = year;
            }
            LunarMonth {
                year: current,
                month: m.month,
                leap: m.leap,
                start_jdn: m.start_jdn,
                days: m.days,
            }
        })
    }

    /// Every month of lunar year `year`, in order.
    pub fn months_of_year(&self, year: i32) -> Result<Vec<LunarMonth>, CalendarError> {
        let this = self.sui(year)?;
        let next = self.sui(year + 1)?;
        Ok(Self::label(&this, year)
            .chain(Self::label(&next, year + 1))
            .filter(|m| m.year == year)
            .collect())
    }

    /// Lunar date of a civil date.
    pub fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, CalendarError> {
        let jdn = date_to_jdn(date);
        let y = date.year();
        let this = self.sui(y)?;
        let next = self.sui(y + 1)?;
        Self::label(&this, y)
            .chain(Self::label(&next, y + 1))
            .find(|m| m.contains(jdn))
            .map(|m| LunarDate::new(m.year, m.month, (jdn - m.start_jdn + 1) as u32, m.leap))
            .ok_or_else(|| CalendarError::OutOfRange(date.to_string()))
    }

    fn check_year(&self, year: i32) -> Result<(), CalendarError> {
        if year < self.min_year || year > self.max_year {
            return Err(CalendarError::WrongYear(year));
        }
        Ok(())
    }

    /// The month record for a lunar year/month/leap triple.
    pub fn month(&self, year: i32, month: u32, leap: bool) -> Result<LunarMonth, CalendarError> {
        self.check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(CalendarError::WrongMonth(month as i32));
        }
        self.months_of_year(year)?
            .into_iter()
            .find(|m| m.month == month && m.leap == leap)
            .ok_or(CalendarError::LeapMonthNotFound { year, month })
    }

    /// Civil date of a lunar date.
    pub fn lunar_to_solar(&self, date: LunarDate) -> Result<NaiveDate, CalendarError> {
        let m = self.month(date.year, date.month, date.leap)?;
        if date.day < 1 || date.day > m.days {
            return Err(CalendarError::WrongDay {
                day: date.day,
                days_in_month: m.days,
            });
        }
        jdn_to_date(m.start_jdn + i64::from(date.day) - 1)
            .ok_or_else(|| CalendarError::OutOfRange(date.to_string()))
    }

    /// Leap month number of a lunar year, or 0 if it has none.
    pub fn leap_month(&self, year: i32) -> Result<u32, CalendarError> {
        self.check_year(year)?;
        Ok(self
            .months_of_year(year)?
            .iter()
            .find(|m| m.leap)
            .map_or(0, |m| m.month))
    }

    /// Number of days (29 or 30) in a lunar month.
    pub fn days_in_month(&self, year: i32, month: u32, leap: bool) -> Result<u32, CalendarError> {
        Ok(self.month(year, month, leap)?.days)
    }
}

/// Chinese-numeral rendering, e.g. "二〇二〇年闰四月初二".
pub fn format_lunar_date(date: &LunarDate) -> String {
    let year: String = date
        .year
        .to_string()
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| DIGITS[d as usize]))
        .collect();
    let leap = if date.leap { "闰" } else { "" };
    let month = MONTH_NAMES
        .get((date.month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("?");
    let day = DAY_NAMES
        .get((date.day as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("?");
    format!("{year}年{leap}{month}月{day}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cal() -> Lunisolar {
        Lunisolar::new(LocalClock::new(480), 1900, 2100)
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn new_year_2020() {
        let l = cal().solar_to_lunar(d(2020, 1, 25)).unwrap();
        assert_eq!(l, LunarDate::new(2020, 1, 1, false));
        let eve = cal().solar_to_lunar(d(2020, 1, 24)).unwrap();
        assert_eq!(eve.year, 2019);
        assert_eq!(eve.month, 12);
    }

    #[test]
    fn spring_2020_date() {
        let l = cal().solar_to_lunar(d(2020, 2, 4)).unwrap();
        assert_eq!(l, LunarDate::new(2020, 1, 11, false));
        assert_eq!(format_lunar_date(&l), "二〇二〇年正月十一");
    }

    #[test]
    fn leap_fourth_month_2020() {
        assert_eq!(cal().leap_month(2020).unwrap(), 4);
        let start = cal()
            .lunar_to_solar(LunarDate::new(2020, 4, 1, true))
            .unwrap();
        assert_eq!(start, d(2020, 5, 23));
    }

    #[test]
    fn months_of_leap_year() {
        let months = cal().months_of_year(2020).unwrap();
        assert_eq!(months.len(), 13);
        assert!(months.iter().all(|m| m.days == 29 || m.days == 30));
        assert_eq!(months[0].month, 1);
        assert_eq!(months[12].month, 12);
    }

    #[test]
    fn format_leap_and_late_month() {
        assert_eq!(
            format_lunar_date(&LunarDate::new(2020, 4, 2, true)),
            "二〇二〇年闰四月初二"
        );
        assert_eq!(
            format_lunar_date(&LunarDate::new(1980, 12, 24, false)),
            "一九八〇年腊月廿四"
        );
    }

    #[test]
    fn lunar_roundtrip() {
        let c = cal();
        for date in [d(2021, 2, 12), d(2023, 3, 22), d(2024, 12, 31), d(1981, 2, 5)] {
            let l = c.solar_to_lunar(date).unwrap();
            assert_eq!(c.lunar_to_solar(l).unwrap(), date, "{l}");
        }
    }
}
