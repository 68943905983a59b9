//! Form-style birth requests with solar or lunar dates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use saju_base::{CalendarOracle, Gender, LunarDate, SajuError};

pub(crate) const DATE_FORMAT_MESSAGE: &str = "생년월일 형식이 올바르지 않습니다.";
pub(crate) const TIME_FORMAT_MESSAGE: &str = "태어난 시간 형식이 올바르지 않습니다.";

/// How the birth date of a request is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarKind {
    #[default]
    Solar,
    Lunar,
    /// Lunar date in the intercalary month.
    LunarLeap,
}

/// A birth request as collected by an input form.
///
/// `solar_date` is read for [`CalendarKind::Solar`]; the lunar fields for
/// the other kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SajuRequest {
    pub calendar: CalendarKind,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub solar_date: String,
    /// `HH:MM`, ignored when `unknown_time` is set.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub unknown_time: bool,
    pub gender: Gender,
    #[serde(default)]
    pub lunar_year: i32,
    #[serde(default)]
    pub lunar_month: u32,
    #[serde(default)]
    pub lunar_day: u32,
}

fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Split `YYYY-MM-DD` into numbers. Range checks happen later.
pub fn parse_solar_date(text: &str) -> Result<(i32, u32, u32), SajuError> {
    let invalid = || SajuError::InvalidInput(DATE_FORMAT_MESSAGE.to_string());
    let mut parts = text.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    if y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return Err(invalid());
    }
    match (digits(y), digits(m), digits(d)) {
        (Some(y), Some(m), Some(d)) => Ok((y as i32, m, d)),
        _ => Err(invalid()),
    }
}

/// Parse a 24-hour `HH:MM` time.
pub fn parse_time(text: &str) -> Result<(u32, u32), SajuError> {
    let invalid = || SajuError::InvalidInput(TIME_FORMAT_MESSAGE.to_string());
    let (h, m) = text.split_once(':').ok_or_else(invalid)?;
    if h.len() != 2 || m.len() != 2 {
        return Err(invalid());
    }
    match (digits(h), digits(m)) {
        (Some(h), Some(m)) if h < 24 && m < 60 => Ok((h, m)),
        _ => Err(invalid()),
    }
}

impl SajuRequest {
    /// Birth hour and minute; midnight when the time is unknown.
    pub fn birth_time(&self) -> Result<(u32, u32), SajuError> {
        if self.unknown_time {
            return Ok((0, 0));
        }
        parse_time(&self.time)
    }

    /// The lunar date of a lunar request, `None` for solar requests.
    pub fn lunar_date(&self) -> Option<LunarDate> {
        let leap = match self.calendar {
            CalendarKind::Solar => return None,
            CalendarKind::Lunar => false,
            CalendarKind::LunarLeap => true,
        };
        Some(LunarDate::new(
            self.lunar_year,
            self.lunar_month,
            self.lunar_day,
            leap,
        ))
    }

    /// Solar birth date as year, month, day.
    pub fn solar_ymd<O: CalendarOracle + ?Sized>(
        &self,
        oracle: &O,
    ) -> Result<(i32, u32, u32), SajuError> {
        match self.lunar_date() {
            None => parse_solar_date(&self.solar_date),
            Some(lunar) => {
                let date: NaiveDate = oracle.lunar_to_solar(lunar)?;
                tracing::debug!(lunar = %lunar, solar = %date, "lunar birth date converted");
                Ok((date.year(), date.month(), date.day()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::CalendarError;
    use saju_calendar::SolarTermCalendar;

    fn request(calendar: CalendarKind) -> SajuRequest {
        SajuRequest {
            calendar,
            solar_date: "2020-02-04".into(),
            time: "18:22".into(),
            unknown_time: false,
            gender: Gender::Male,
            lunar_year: 2020,
            lunar_month: 4,
            lunar_day: 2,
        }
    }

    #[test]
    fn solar_date_format() {
        assert_eq!(parse_solar_date("2020-02-04").unwrap(), (2020, 2, 4));
        for bad in ["2020-2-04", "20-02-04", "2020/02/04", "2020-02-04-01", "abcd-ef-gh", ""] {
            assert_eq!(
                parse_solar_date(bad),
                Err(SajuError::InvalidInput(DATE_FORMAT_MESSAGE.into())),
                "{bad}"
            );
        }
    }

    #[test]
    fn time_format() {
        assert_eq!(parse_time("00:00").unwrap(), (0, 0));
        assert_eq!(parse_time("23:59").unwrap(), (23, 59));
        for bad in ["24:00", "12:60", "7:30", "12-30", "+1:30"] {
            assert!(parse_time(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn unknown_time_is_midnight() {
        let mut r = request(CalendarKind::Solar);
        r.unknown_time = true;
        r.time = "garbage".into();
        assert_eq!(r.birth_time().unwrap(), (0, 0));
    }

    #[test]
    fn solar_request_reads_solar_date() {
        let cal = SolarTermCalendar::default();
        assert_eq!(request(CalendarKind::Solar).solar_ymd(&cal).unwrap(), (2020, 2, 4));
    }

    #[test]
    fn lunar_requests_convert() {
        let cal = SolarTermCalendar::default();
        assert_eq!(request(CalendarKind::Lunar).solar_ymd(&cal).unwrap(), (2020, 4, 24));
        assert_eq!(
            request(CalendarKind::LunarLeap).solar_ymd(&cal).unwrap(),
            (2020, 5, 24)
        );
    }

    #[test]
    fn missing_leap_month() {
        let cal = SolarTermCalendar::default();
        let mut r = request(CalendarKind::LunarLeap);
        r.lunar_year = 2021;
        assert_eq!(
            r.solar_ymd(&cal),
            Err(SajuError::Calendar(CalendarError::LeapMonthNotFound {
                year: 2021,
                month: 4
            }))
        );
    }
}
