//! strftime formatting for user-supplied format strings.

use std::fmt::Write;

use chrono::{NaiveDate, NaiveDateTime};

/// Format with a user format string. Returns `None` if the format is invalid
/// instead of panicking like `to_string()` would.
pub fn strftime(dt: NaiveDateTime, fmt: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", dt.format(fmt)).ok()?;
    Some(out)
}

/// Format a day, falling back to ISO form when `fmt` is invalid.
pub fn format_day(day: NaiveDate, fmt: &str) -> String {
    day.and_hms_opt(0, 0, 0)
        .and_then(|dt| strftime(dt, fmt))
        .unwrap_or_else(|| day.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day_uses_format() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(format_day(day, "%D"), "03/04/25");
        assert_eq!(format_day(day, "%a %F"), "Tue 2025-03-04");
    }

    #[test]
    fn test_invalid_format_does_not_panic() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let dt = day.and_hms_opt(10, 0, 0).unwrap();
        assert_eq!(strftime(dt, "%Q"), None);
        assert_eq!(format_day(day, "%Q"), "2025-03-04");
    }
}
