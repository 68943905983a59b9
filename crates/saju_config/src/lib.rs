//! Configuration for the calendar oracle and chart facade.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields a working setup:
//!
//! ```json
//! { "calendar": { "utc_offset_minutes": 480, "late_zi_hour": "same_day",
//!                 "min_lunar_year": 1900, "max_lunar_year": 2100 } }
//! ```

pub mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Environment variable naming a config file for [`SajuConfig::discover`].
pub const CONFIG_ENV_VAR: &str = "SAJU_CONFIG";

/// Largest accepted UTC offset magnitude, in minutes.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Which civil date the 23:00–23:59 hour counts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LateZiHour {
    /// Day pillar keeps the civil date; the hour stem follows the next day.
    #[default]
    SameDay,
    /// Day pillar advances to the next day at 23:00.
    NextDay,
}

/// Calendar oracle settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Offset of birth wall-clock times from UTC, minutes east.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_minutes: i32,
    #[serde(default)]
    pub late_zi_hour: LateZiHour,
    /// First lunar year accepted for lunar input.
    #[serde(default = "default_min_lunar_year")]
    pub min_lunar_year: i32,
    /// Last lunar year accepted for lunar input.
    #[serde(default = "default_max_lunar_year")]
    pub max_lunar_year: i32,
}

fn default_utc_offset() -> i32 {
    480
}

fn default_min_lunar_year() -> i32 {
    1900
}

fn default_max_lunar_year() -> i32 {
    2100
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset(),
            late_zi_hour: LateZiHour::default(),
            min_lunar_year: default_min_lunar_year(),
            max_lunar_year: default_max_lunar_year(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SajuConfig {
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl SajuConfig {
    /// Parse and validate JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Config from the file named by `SAJU_CONFIG`, or defaults.
    ///
    /// An unreadable or invalid file is logged and replaced by defaults.
    pub fn discover() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(config) => {
                tracing::debug!(path = %path, "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "falling back to default config");
                Self::default()
            }
        }
    }

    /// Reject offsets beyond ±14 hours and inverted lunar year ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cal = &self.calendar;
        if cal.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::Invalid("utc_offset_minutes must be within ±14 hours"));
        }
        if cal.min_lunar_year > cal.max_lunar_year {
            return Err(ConfigError::Invalid("min_lunar_year exceeds max_lunar_year"));
        }
        Ok(())
    }
}
