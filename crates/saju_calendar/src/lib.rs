//! Astronomical calendar oracle for four-pillars charts.
//!
//! This crate provides:
//! - Apparent solar longitude and the 24 solar terms (절기)
//! - True new moons and the Chinese-rule lunisolar calendar with leap months
//! - Year, month, day and hour pillars with the late-子 hour rule
//! - Luck-period direction, start age and pillars
//! - [`SolarTermCalendar`], the [`saju_base::CalendarOracle`] over all of the above

pub mod eight_char;
pub mod lunisolar;
pub mod moon_phase;
pub mod oracle;
pub mod solar_term;
pub mod sun;
pub mod yun;

pub use eight_char::{EightChar, day_index, eight_char, hour_branch_index};
pub use lunisolar::{LunarMonth, Lunisolar, format_lunar_date};
pub use moon_phase::{SYNODIC_MONTH_DAYS, lunation_near, new_moon_jde};
pub use oracle::SolarTermCalendar;
pub use solar_term::{
    ALL_SOLAR_TERMS, DONGJI_LONGITUDE, IPCHUN_LONGITUDE, SolarTerm, TROPICAL_YEAR_DAYS,
    next_crossing, prev_crossing,
};
pub use sun::{apparent_longitude, normalize_deg, signed_deg};
pub use yun::{LuckStart, luck_periods, luck_start, runs_forward, start_date, start_offset};
