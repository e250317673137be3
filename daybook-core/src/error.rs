//! Error types for daybook.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in daybook operations.
#[derive(Error, Debug)]
pub enum DaybookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Wrong configuration variable format for '{key}': {value}")]
    ConfigValue { key: String, value: String },

    #[error("Wrong color theme '{0}'")]
    ColorTheme(String),

    #[error("Event file error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("No item #{pos} on {day}")]
    NoSuchItem { day: NaiveDate, pos: usize },

    #[error("Invalid date '{0}'")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for daybook operations.
pub type DaybookResult<T> = Result<T, DaybookError>;
