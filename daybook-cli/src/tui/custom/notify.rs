//! Notify bar options screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;

use super::{ScreenAction, config_window, prompt_lines, put};
use crate::tui::attr::{Attr, Attributes};
use crate::tui::notify_bar::NotifyBar;
use crate::tui::prompt::{LinePrompt, PromptOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Date,
    Clock,
    Warning,
    Command,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct NotifyConfig {
    prompt: Option<(Field, LinePrompt)>,
}

impl NotifyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyEvent, notify: &NotifyBar) -> ScreenAction {
        if let Some((field, prompt)) = &mut self.prompt {
            match prompt.handle_key(key) {
                PromptOutcome::Pending => {}
                PromptOutcome::Cancelled => self.prompt = None,
                PromptOutcome::Submitted(value) => {
                    apply(*field, &value, notify);
                    self.prompt = None;
                }
            }
            return ScreenAction::Stay;
        }

        let conf = notify.conf();
        let (field, label, current) = match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return ScreenAction::Close,
            KeyCode::Char('1') => {
                let mut conf = conf;
                conf.show = !conf.show;
                notify.set_conf(conf);
                return ScreenAction::Stay;
            }
            KeyCode::Char('2') => (
                Field::Date,
                "Enter the date format (see 'man 3 strftime' for possible formats) ",
                conf.date,
            ),
            KeyCode::Char('3') => (
                Field::Clock,
                "Enter the time format (see 'man 3 strftime' for possible formats) ",
                conf.clock,
            ),
            KeyCode::Char('4') => (
                Field::Warning,
                "Enter the number of seconds (0 not to be warned before an appointment)",
                conf.warning.to_string(),
            ),
            KeyCode::Char('5') => (
                Field::Command,
                "Enter the notification command ",
                conf.command,
            ),
            _ => return ScreenAction::Stay,
        };

        self.prompt = Some((field, LinePrompt::with_input(label, current)));
        ScreenAction::Stay
    }

    pub fn status_lines(&self) -> Vec<Line<'static>> {
        match &self.prompt {
            Some((_, prompt)) => prompt_lines(prompt),
            None => vec![
                Line::raw("Enter an option number to change its value [Q to quit] "),
                Line::raw(""),
            ],
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, notify: &NotifyBar, attrs: Attributes) {
        let inner = config_window(area, buf, "notify-bar options", attrs);
        let conf = notify.conf();
        let value_style = attrs.style(Attr::Highest);

        let show_label = "[1] notify-bar_show = ";
        put(buf, inner, 2, 1, show_label, Style::default());
        put(
            buf,
            inner,
            2 + show_label.len() as u16,
            1,
            if conf.show { "yes" } else { "no" },
            attrs.option(conf.show),
        );
        put(buf, inner, 2, 2, "(if set to YES, notify-bar will be displayed)", Style::default());

        let rows = [
            ("[2] notify-bar_date = ", conf.date.clone(), "(Format of the date to be displayed inside notify-bar)"),
            ("[3] notify-bar_clock = ", conf.clock.clone(), "(Format of the time to be displayed inside notify-bar)"),
            (
                "[4] notify-bar_warning = ",
                conf.warning.to_string(),
                "(Warn user if an appointment is within next 'notify-bar_warning' seconds)",
            ),
            (
                "[5] notify-bar_command = ",
                conf.command.clone(),
                "(Command used to notify user of an upcoming appointment)",
            ),
        ];

        for (i, (label, value, help)) in rows.iter().enumerate() {
            let y = 4 + 3 * i as u16;
            put(buf, inner, 2, y, label, Style::default());
            put(buf, inner, 2 + label.len() as u16, y, value, value_style);
            put(buf, inner, 2, y + 1, help, Style::default());
        }
    }
}

fn apply(field: Field, value: &str, notify: &NotifyBar) {
    let mut conf = notify.conf();
    match field {
        Field::Date if !value.is_empty() => conf.date = value.to_string(),
        Field::Clock if !value.is_empty() => conf.clock = value.to_string(),
        Field::Warning => match value.trim().parse() {
            Ok(seconds) => conf.warning = seconds,
            Err(_) => return,
        },
        Field::Command => conf.command = value.to_string(),
        _ => return,
    }
    notify.set_conf(conf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::prompt::tests::key;
    use daybook_core::config::NotifyConf;
    use pretty_assertions::assert_eq;

    fn clear_and_type(screen: &mut NotifyConfig, notify: &NotifyBar, text: &str) {
        for _ in 0..40 {
            screen.handle_key(key(KeyCode::Backspace), notify);
        }
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)), notify);
        }
        screen.handle_key(key(KeyCode::Enter), notify);
    }

    #[test]
    fn test_toggle_show() {
        let notify = NotifyBar::new(NotifyConf::default());
        let mut screen = NotifyConfig::new();

        screen.handle_key(key(KeyCode::Char('1')), &notify);
        assert!(!notify.is_shown());
    }

    #[test]
    fn test_edit_clock_and_warning() {
        let notify = NotifyBar::new(NotifyConf::default());
        let mut screen = NotifyConfig::new();

        screen.handle_key(key(KeyCode::Char('3')), &notify);
        clear_and_type(&mut screen, &notify, "%H:%M");
        screen.handle_key(key(KeyCode::Char('4')), &notify);
        clear_and_type(&mut screen, &notify, "90");

        let conf = notify.conf();
        assert_eq!(conf.clock, "%H:%M");
        assert_eq!(conf.warning, 90);
    }

    #[test]
    fn test_bad_warning_is_ignored() {
        let notify = NotifyBar::new(NotifyConf::default());
        let mut screen = NotifyConfig::new();

        screen.handle_key(key(KeyCode::Char('4')), &notify);
        clear_and_type(&mut screen, &notify, "soon");

        assert_eq!(notify.conf().warning, 300);
    }

    #[test]
    fn test_empty_date_keeps_value() {
        let notify = NotifyBar::new(NotifyConf::default());
        let mut screen = NotifyConfig::new();

        screen.handle_key(key(KeyCode::Char('2')), &notify);
        clear_and_type(&mut screen, &notify, "");

        assert_eq!(notify.conf().date, "%a %F");
    }
}
