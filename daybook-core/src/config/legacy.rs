//! Line-oriented configuration format of older organizer releases.
//!
//! Each setting is a `key=` line followed by its value on the next line:
//!
//! ```text
//! # If this option is set to yes, automatic save is done when quitting
//! auto_save=
//! yes
//! ```
//!
//! Lines that are neither a known key nor the value following one are
//! ignored, which covers comments and blank lines.

use std::fmt::Write;

use crate::config::{ColorTheme, Conf, InputDateFormat, Layout};
use crate::error::{DaybookError, DaybookResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    AutoSave,
    ConfirmQuit,
    ConfirmDelete,
    SkipSystemDialogs,
    SkipProgressBar,
    WeekBeginsOnMonday,
    ColorTheme,
    Layout,
    NotifyBarShow,
    NotifyBarDate,
    NotifyBarClock,
    NotifyBarWarning,
    NotifyBarCommand,
    OutputDateFmt,
    InputDateFmt,
}

impl Key {
    fn from_line(line: &str) -> Option<Key> {
        let key = match line.trim_end() {
            "auto_save=" => Key::AutoSave,
            "confirm_quit=" => Key::ConfirmQuit,
            "confirm_delete=" => Key::ConfirmDelete,
            "skip_system_dialogs=" => Key::SkipSystemDialogs,
            "skip_progress_bar=" => Key::SkipProgressBar,
            "week_begins_on_monday=" => Key::WeekBeginsOnMonday,
            "color-theme=" => Key::ColorTheme,
            "layout=" => Key::Layout,
            "notify-bar_show=" => Key::NotifyBarShow,
            "notify-bar_date=" => Key::NotifyBarDate,
            "notify-bar_clock=" => Key::NotifyBarClock,
            "notify-bar_warning=" => Key::NotifyBarWarning,
            "notify-bar_command=" => Key::NotifyBarCommand,
            "output_datefmt=" => Key::OutputDateFmt,
            "input_datefmt=" => Key::InputDateFmt,
            _ => return None,
        };
        Some(key)
    }

    fn name(&self) -> &'static str {
        match self {
            Key::AutoSave => "auto_save",
            Key::ConfirmQuit => "confirm_quit",
            Key::ConfirmDelete => "confirm_delete",
            Key::SkipSystemDialogs => "skip_system_dialogs",
            Key::SkipProgressBar => "skip_progress_bar",
            Key::WeekBeginsOnMonday => "week_begins_on_monday",
            Key::ColorTheme => "color-theme",
            Key::Layout => "layout",
            Key::NotifyBarShow => "notify-bar_show",
            Key::NotifyBarDate => "notify-bar_date",
            Key::NotifyBarClock => "notify-bar_clock",
            Key::NotifyBarWarning => "notify-bar_warning",
            Key::NotifyBarCommand => "notify-bar_command",
            Key::OutputDateFmt => "output_datefmt",
            Key::InputDateFmt => "input_datefmt",
        }
    }
}

fn parse_bool(key: Key, value: &str) -> DaybookResult<bool> {
    match value.trim() {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(DaybookError::ConfigValue {
            key: key.name().to_string(),
            value: other.to_string(),
        }),
    }
}

fn apply(conf: &mut Conf, key: Key, value: &str) -> DaybookResult<()> {
    match key {
        Key::AutoSave => conf.general.auto_save = parse_bool(key, value)?,
        Key::ConfirmQuit => conf.general.confirm_quit = parse_bool(key, value)?,
        Key::ConfirmDelete => conf.general.confirm_delete = parse_bool(key, value)?,
        Key::SkipSystemDialogs => conf.general.skip_system_dialogs = parse_bool(key, value)?,
        Key::SkipProgressBar => conf.general.skip_progress_bar = parse_bool(key, value)?,
        Key::WeekBeginsOnMonday => conf.general.week_begins_on_monday = parse_bool(key, value)?,
        Key::ColorTheme => conf.appearance.color_theme = ColorTheme::parse(value)?,
        Key::Layout => {
            conf.appearance.layout = Layout::from(value.trim().parse::<i64>().unwrap_or(0))
        }
        Key::NotifyBarShow => conf.notify_bar.show = parse_bool(key, value)?,
        Key::NotifyBarDate => conf.notify_bar.date = value.to_string(),
        Key::NotifyBarClock => conf.notify_bar.clock = value.to_string(),
        // Unparsable numbers read as 0, like layout and input_datefmt.
        Key::NotifyBarWarning => conf.notify_bar.warning = value.trim().parse().unwrap_or(0),
        Key::NotifyBarCommand => conf.notify_bar.command = value.to_string(),
        Key::OutputDateFmt => {
            if !value.is_empty() {
                conf.general.output_datefmt = value.to_string();
            }
        }
        Key::InputDateFmt => {
            conf.general.input_datefmt =
                InputDateFormat::from(value.trim().parse::<i64>().unwrap_or(0))
        }
    }
    Ok(())
}

/// Read a legacy configuration on top of the defaults.
pub fn parse(text: &str) -> DaybookResult<Conf> {
    let mut conf = Conf::default();
    let mut pending: Option<Key> = None;

    for line in text.lines() {
        if let Some(key) = pending.take() {
            apply(&mut conf, key, line)?;
        }
        pending = Key::from_line(line);
    }

    Ok(conf)
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Render `conf` in the legacy format.
pub fn render(conf: &Conf) -> String {
    let general = &conf.general;
    let nbar = &conf.notify_bar;

    let entries: [(&str, Key, String); 15] = [
        (
            "If this option is set to yes, automatic save is done when quitting",
            Key::AutoSave,
            yes_no(general.auto_save).into(),
        ),
        (
            "If this option is set to yes, confirmation is required before quitting",
            Key::ConfirmQuit,
            yes_no(general.confirm_quit).into(),
        ),
        (
            "If this option is set to yes, confirmation is required before deleting an event",
            Key::ConfirmDelete,
            yes_no(general.confirm_delete).into(),
        ),
        (
            "If this option is set to yes, messages about loaded and saved data will not be displayed",
            Key::SkipSystemDialogs,
            yes_no(general.skip_system_dialogs).into(),
        ),
        (
            "If this option is set to yes, progress bar appearing when saving data will not be displayed",
            Key::SkipProgressBar,
            yes_no(general.skip_progress_bar).into(),
        ),
        (
            "If this option is set to yes, monday is the first day of the week, else it is sunday",
            Key::WeekBeginsOnMonday,
            yes_no(general.week_begins_on_monday).into(),
        ),
        (
            "This is the color theme used for menus",
            Key::ColorTheme,
            conf.appearance.color_theme.name(),
        ),
        (
            "This is the layout of the calendar",
            Key::Layout,
            conf.appearance.layout.number().to_string(),
        ),
        (
            "If this option is set to yes, notify-bar will be displayed",
            Key::NotifyBarShow,
            yes_no(nbar.show).into(),
        ),
        (
            "Format of the date to be displayed inside notify-bar",
            Key::NotifyBarDate,
            nbar.date.clone(),
        ),
        (
            "Format of the time to be displayed inside notify-bar",
            Key::NotifyBarClock,
            nbar.clock.clone(),
        ),
        (
            "Warn user if he has an appointment within next 'notify-bar_warning' seconds",
            Key::NotifyBarWarning,
            nbar.warning.to_string(),
        ),
        (
            "Command used to notify user of an upcoming appointment",
            Key::NotifyBarCommand,
            nbar.command.clone(),
        ),
        (
            "Format of the date to be displayed in non-interactive mode",
            Key::OutputDateFmt,
            general.output_datefmt.clone(),
        ),
        (
            "Format to be used when entering a date (1-mm/dd/yyyy, 2-dd/mm/yyyy, 3-yyyy/mm/dd)",
            Key::InputDateFmt,
            general.input_datefmt.number().to_string(),
        ),
    ];

    let mut out = String::from("# This is the configuration file for daybook.\n\n");
    for (comment, key, value) in entries {
        // Writing to a String cannot fail.
        let _ = write!(out, "# {comment}\n{}=\n{value}\n\n", key.name());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeColor;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_reads_values_after_keys() {
        let text = "\
# comment
auto_save=
no
confirm_delete=
no
week_begins_on_monday=
yes
color-theme=
blue on default
layout=
3
notify-bar_date=
%d/%m
notify-bar_warning=
120
input_datefmt=
3
";
        let conf = parse(text).unwrap();

        assert!(!conf.general.auto_save);
        assert!(conf.general.confirm_quit);
        assert!(!conf.general.confirm_delete);
        assert!(conf.general.week_begins_on_monday);
        assert_eq!(
            conf.appearance.color_theme,
            ColorTheme::new(ThemeColor::Blue, ThemeColor::Default)
        );
        assert_eq!(conf.appearance.layout.number(), 3);
        assert_eq!(conf.notify_bar.date, "%d/%m");
        assert_eq!(conf.notify_bar.warning, 120);
        assert_eq!(conf.general.input_datefmt, InputDateFormat::YearMonthDay);
    }

    #[test]
    fn test_parse_rejects_bad_boolean() {
        let err = parse("confirm_quit=\nmaybe\n").unwrap_err();
        assert!(matches!(err, DaybookError::ConfigValue { ref key, .. } if key == "confirm_quit"));
    }

    #[test]
    fn test_parse_out_of_range_input_format_falls_back() {
        let conf = parse("input_datefmt=\n9\n").unwrap();
        assert_eq!(conf.general.input_datefmt, InputDateFormat::MonthDayYear);
    }

    #[test]
    fn test_non_numeric_warning_reads_as_zero() {
        let conf = parse("notify-bar_warning=\nsoon\n").unwrap();
        assert_eq!(conf.notify_bar.warning, 0);
    }

    #[test]
    fn test_empty_output_format_keeps_default() {
        let conf = parse("output_datefmt=\n\n").unwrap();
        assert_eq!(conf.general.output_datefmt, "%D");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let conf = parse("some_future_option=\n42\nauto_save=\nno\n").unwrap();
        assert!(!conf.general.auto_save);
    }

    #[test]
    fn test_old_numeric_theme() {
        let conf = parse("color-theme=\n0\n").unwrap();
        assert!(!conf.appearance.color_theme.colorize);
    }

    #[test]
    fn test_render_reads_back() {
        let mut conf = Conf::default();
        conf.general.skip_progress_bar = true;
        conf.general.output_datefmt = "%F".into();
        conf.appearance.color_theme = ColorTheme::new(ThemeColor::Black, ThemeColor::Yellow);
        conf.notify_bar.show = false;

        let text = render(&conf);
        assert!(text.contains("skip_progress_bar=\nyes\n"));
        assert!(text.contains("color-theme=\nblack on yellow\n"));
        assert_eq!(parse(&text).unwrap(), conf);
    }
}
