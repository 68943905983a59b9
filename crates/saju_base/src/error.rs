//! Error types for chart calculations.

use thiserror::Error;

/// Failures reported by a calendar oracle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Lunar year outside the supported range.
    #[error("wrong lunar year {0}")]
    WrongYear(i32),
    /// Lunar month number outside 1..=12.
    #[error("wrong lunar month {0}")]
    WrongMonth(i32),
    /// Day number not present in the requested lunar month.
    #[error("wrong lunar day {day}: month has only {days_in_month} days")]
    WrongDay { day: u32, days_in_month: u32 },
    /// Leap month requested for a year whose leap month differs or is absent.
    #[error("wrong lunar month: year {year} has no leap month {month}")]
    LeapMonthNotFound { year: i32, month: u32 },
    /// Instant outside the span the oracle can compute.
    #[error("date outside the supported calendar range: {0}")]
    OutOfRange(String),
}

/// Errors from chart construction and classification.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Birth fields out of range or not a real calendar instant.
    #[error("invalid date/time input: {0}")]
    InvalidInput(String),
    /// Character outside the ten stems and twelve branches.
    #[error("invalid symbol '{0}'")]
    InvalidSymbol(char),
    /// Element pair fell through every cycle relation.
    #[error("no ten-god relation between '{day_master}' and '{target}'")]
    UnresolvableRelation { day_master: char, target: char },
    /// Error from the calendar oracle.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_error_wraps() {
        let err: SajuError = CalendarError::WrongMonth(13).into();
        assert_eq!(err, SajuError::Calendar(CalendarError::WrongMonth(13)));
        assert!(err.to_string().contains("wrong lunar month 13"));
    }

    #[test]
    fn invalid_symbol_display() {
        assert_eq!(SajuError::InvalidSymbol('X').to_string(), "invalid symbol 'X'");
    }
}
