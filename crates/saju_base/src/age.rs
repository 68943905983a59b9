//! International and traditional Korean ages.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Age in both reckonings at a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ages {
    /// Completed years (만 나이).
    pub international: u32,
    /// International age plus one (세는 나이).
    pub korean: u32,
}

/// Completed years between `birth` and `reference`; zero if the reference precedes the birth.
pub fn international_age(birth: NaiveDate, reference: NaiveDate) -> u32 {
    let mut age = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    u32::try_from(age).unwrap_or(0)
}

/// International and Korean ages of `birth` as of `reference`.
pub fn resolve_ages(birth: NaiveDate, reference: NaiveDate) -> Ages {
    let international = international_age(birth, reference);
    Ages {
        international,
        korean: international + 1,
    }
}
