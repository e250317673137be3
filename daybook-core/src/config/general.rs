//! General options.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DaybookError, DaybookResult};

/// Date layout accepted when the user types a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum InputDateFormat {
    #[default]
    MonthDayYear = 1,
    DayMonthYear = 2,
    YearMonthDay = 3,
}

impl InputDateFormat {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(InputDateFormat::MonthDayYear),
            2 => Some(InputDateFormat::DayMonthYear),
            3 => Some(InputDateFormat::YearMonthDay),
            _ => None,
        }
    }

    pub fn number(&self) -> i64 {
        *self as i64
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            InputDateFormat::MonthDayYear => "%m/%d/%Y",
            InputDateFormat::DayMonthYear => "%d/%m/%Y",
            InputDateFormat::YearMonthDay => "%Y/%m/%d",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InputDateFormat::MonthDayYear => "mm/dd/yyyy",
            InputDateFormat::DayMonthYear => "dd/mm/yyyy",
            InputDateFormat::YearMonthDay => "yyyy/mm/dd",
        }
    }

    pub fn parse_date(&self, s: &str) -> DaybookResult<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), self.pattern())
            .map_err(|_| DaybookError::InvalidDate(format!("{} (expected {})", s, self.description())))
    }
}

impl From<i64> for InputDateFormat {
    /// Numbers outside 1..=3 fall back to mm/dd/yyyy.
    fn from(n: i64) -> Self {
        InputDateFormat::from_number(n).unwrap_or_default()
    }
}

impl From<InputDateFormat> for i64 {
    fn from(f: InputDateFormat) -> Self {
        f.number()
    }
}

impl fmt::Display for InputDateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Behavior switches shown on the general options screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralOptions {
    /// Save automatically when quitting
    pub auto_save: bool,
    pub confirm_quit: bool,
    pub confirm_delete: bool,
    /// Hide messages about loaded and saved data
    pub skip_system_dialogs: bool,
    pub skip_progress_bar: bool,
    pub week_begins_on_monday: bool,
    /// strftime format used in non-interactive output
    pub output_datefmt: String,
    pub input_datefmt: InputDateFormat,
}

impl Default for GeneralOptions {
    fn default() -> Self {
        GeneralOptions {
            auto_save: true,
            confirm_quit: true,
            confirm_delete: true,
            skip_system_dialogs: false,
            skip_progress_bar: false,
            week_begins_on_monday: false,
            output_datefmt: "%D".to_string(),
            input_datefmt: InputDateFormat::default(),
        }
    }
}
