//! Birth-input validation.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::SajuError;

/// A validated local civil birth instant, to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthInput {
    at: NaiveDateTime,
}

impl BirthInput {
    /// Validate numeric fields: month 1–12, day 1–31, hour 0–23,
    /// minute 0–59, and the combination must exist on the calendar.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, SajuError> {
        if !(1..=12).contains(&month) {
            return Err(SajuError::InvalidInput(format!("month {month}")));
        }
        if !(1..=31).contains(&day) {
            return Err(SajuError::InvalidInput(format!("day {day}")));
        }
        if hour > 23 {
            return Err(SajuError::InvalidInput(format!("hour {hour}")));
        }
        if minute > 59 {
            return Err(SajuError::InvalidInput(format!("minute {minute}")));
        }
        let at = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .ok_or_else(|| {
                SajuError::InvalidInput(format!("{year}-{month:02}-{day:02} does not exist"))
            })?;
        Ok(Self { at })
    }

    /// Birth instant as a civil date-time.
    pub fn at(&self) -> NaiveDateTime {
        self.at
    }

    /// Civil birth date.
    pub fn date(&self) -> NaiveDate {
        self.at.date()
    }

    /// Civil birth year.
    pub fn year(&self) -> i32 {
        self.at.year()
    }

    /// Birth hour, 0..=23.
    pub fn hour(&self) -> u32 {
        self.at.hour()
    }
}

/// Birth fields as loosely-typed numbers, e.g. from a form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthFields {
    pub year: f64,
    pub month: f64,
    pub day: f64,
    pub hour: f64,
    pub minute: f64,
}

fn integral<T: TryFrom<i64>>(name: &str, v: f64) -> Result<T, SajuError> {
    if !v.is_finite() || v.fract() != 0.0 {
        return Err(SajuError::InvalidInput(format!("{name} {v} is not an integer")));
    }
    T::try_from(v as i64).map_err(|_| SajuError::InvalidInput(format!("{name} {v} out of range")))
}

impl TryFrom<BirthFields> for BirthInput {
    type Error = SajuError;

    fn try_from(f: BirthFields) -> Result<Self, Self::Error> {
        Self::new(
            integral("year", f.year)?,
            integral("month", f.month)?,
            integral("day", f.day)?,
            integral("hour", f.hour)?,
            integral("minute", f.minute)?,
        )
    }
}
