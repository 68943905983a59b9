//! Time-scale plumbing for the calendar engine.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - Julian Day Numbers for civil dates
//! - ΔT (TT − UT) from the Espenak–Meeus polynomials
//! - A fixed-offset civil clock bridging wall time and Julian Ephemeris Dates
//! - Injectable wall clocks for reading "now"

pub mod clock;
pub mod delta_t;
pub mod julian;

pub use clock::{FixedClock, LocalClock, SystemClock, WallClock, truncate_to_minute};
pub use delta_t::delta_t_seconds;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, date_to_jdn, jd_to_calendar,
    jde_to_centuries, jdn_to_date,
};
