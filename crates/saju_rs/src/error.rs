//! Error type for the facade.

use saju_base::{CalendarError, SajuError};
use saju_config::ConfigError;
use thiserror::Error;

use crate::request::{DATE_FORMAT_MESSAGE, TIME_FORMAT_MESSAGE};

const LEAP_MONTH_MESSAGE: &str =
    "선택한 연도에는 해당 윤달 월이 없습니다. 월/윤달 설정을 확인해 주세요.";
const LUNAR_DAY_MESSAGE: &str = "선택한 날짜가 해당 음력 월에 존재하지 않습니다.";
const INVALID_INPUT_MESSAGE: &str = "입력한 날짜 또는 시간이 올바르지 않습니다.";
const FALLBACK_MESSAGE: &str = "입력값을 다시 확인해 주세요.";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SajuRsError {
    #[error(transparent)]
    Saju(#[from] SajuError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("calendar already initialized")]
    AlreadyInitialized,
}

impl From<CalendarError> for SajuRsError {
    fn from(e: CalendarError) -> Self {
        Self::Saju(SajuError::Calendar(e))
    }
}

impl SajuRsError {
    /// Korean message suitable for showing next to a birth-input form.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Saju(SajuError::Calendar(cal)) => match cal {
                CalendarError::WrongYear(_)
                | CalendarError::WrongMonth(_)
                | CalendarError::LeapMonthNotFound { .. } => LEAP_MONTH_MESSAGE,
                CalendarError::WrongDay { .. } => LUNAR_DAY_MESSAGE,
                _ => FALLBACK_MESSAGE,
            },
            Self::Saju(SajuError::InvalidInput(msg))
                if msg == DATE_FORMAT_MESSAGE || msg == TIME_FORMAT_MESSAGE =>
            {
                msg.as_str()
            }
            Self::Saju(SajuError::InvalidInput(_)) => INVALID_INPUT_MESSAGE,
            _ => FALLBACK_MESSAGE,
        }
    }
}
