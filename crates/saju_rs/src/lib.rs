//! Convenience facade for four-pillars chart calculation.
//!
//! Holds a global calendar oracle and offers functions that take plain
//! birth fields or form-style requests, removing the need to build a
//! [`SolarTermCalendar`] or [`BirthInput`] by hand.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! init(SajuConfig::default()).expect("calendar init");
//!
//! let chart = calculate_saju(1990, 5, 17, 9, 30, Gender::Female).unwrap();
//! println!("day master: {}", chart.day_master);
//! ```

pub mod convenience;
pub mod error;
pub mod global;
pub mod request;

pub use convenience::{
    calculate_saju, calculate_saju_at, calculate_saju_for, calculate_saju_with_clock,
    leap_month_for_year, valid_lunar_days,
};
pub use error::SajuRsError;
pub use global::{calendar, init, is_initialized};
pub use request::{CalendarKind, SajuRequest, parse_solar_date, parse_time};

// Re-export the types callers need so `use saju_rs::*` is enough.
pub use saju_base::{
    BirthInput, DailyFortune, ElementDistribution, Gender, LuckPillarEntry, LunarDate, Pillar,
    PillarPosition, SajuChart, ShenshaKind, ShenshaRecord, TenGod,
};
pub use saju_calendar::SolarTermCalendar;
pub use saju_config::{CalendarConfig, LateZiHour, SajuConfig};
pub use saju_time::{FixedClock, SystemClock, WallClock};
