//! Process-wide calendar oracle.

use std::sync::OnceLock;

use saju_calendar::SolarTermCalendar;
use saju_config::SajuConfig;

use crate::error::SajuRsError;

static CALENDAR: OnceLock<SolarTermCalendar> = OnceLock::new();

/// Install the calendar built from `config`.
///
/// Fails with [`SajuRsError::AlreadyInitialized`] once a calendar exists,
/// including one created lazily by [`calendar`].
pub fn init(config: SajuConfig) -> Result<(), SajuRsError> {
    config.validate()?;
    CALENDAR
        .set(SolarTermCalendar::from_config(&config))
        .map_err(|_| SajuRsError::AlreadyInitialized)?;
    tracing::info!(
        utc_offset_minutes = config.calendar.utc_offset_minutes,
        late_zi_hour = ?config.calendar.late_zi_hour,
        "calendar initialized"
    );
    Ok(())
}

/// Whether [`init`] has completed.
pub fn is_initialized() -> bool {
    CALENDAR.get().is_some()
}

/// The global calendar, created from [`SajuConfig::discover`] on first use.
pub fn calendar() -> &'static SolarTermCalendar {
    CALENDAR.get_or_init(|| SolarTermCalendar::from_config(&SajuConfig::discover()))
}
