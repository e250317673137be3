//! General options screen.

use crossterm::event::{KeyCode, KeyEvent};
use daybook_core::config::{GeneralOptions, InputDateFormat};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;

use super::{ScreenAction, config_window, prompt_lines, put};
use crate::tui::attr::{Attr, Attributes};
use crate::tui::prompt::{LinePrompt, PromptOutcome};

const NUMBER_HINT: &str = "Enter an option number to change its value [Q to quit] ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    OutputDateFmt,
    InputDateFmt,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct GeneralConfig {
    prompt: Option<(Field, LinePrompt)>,
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

impl GeneralConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyEvent, opts: &mut GeneralOptions) -> ScreenAction {
        if let Some((field, prompt)) = &mut self.prompt {
            match prompt.handle_key(key) {
                PromptOutcome::Pending => {}
                PromptOutcome::Cancelled => self.prompt = None,
                PromptOutcome::Submitted(value) => {
                    apply(*field, &value, opts);
                    self.prompt = None;
                }
            }
            return ScreenAction::Stay;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return ScreenAction::Close,
            KeyCode::Char('1') => opts.auto_save = !opts.auto_save,
            KeyCode::Char('2') => opts.confirm_quit = !opts.confirm_quit,
            KeyCode::Char('3') => opts.confirm_delete = !opts.confirm_delete,
            KeyCode::Char('4') => opts.skip_system_dialogs = !opts.skip_system_dialogs,
            KeyCode::Char('5') => opts.skip_progress_bar = !opts.skip_progress_bar,
            KeyCode::Char('6') => opts.week_begins_on_monday = !opts.week_begins_on_monday,
            KeyCode::Char('7') => {
                self.prompt = Some((
                    Field::OutputDateFmt,
                    LinePrompt::with_input(
                        "Enter the date format (see 'man 3 strftime' for possible formats) ",
                        opts.output_datefmt.clone(),
                    ),
                ));
            }
            KeyCode::Char('8') => {
                self.prompt = Some((
                    Field::InputDateFmt,
                    LinePrompt::new(
                        "Enter the date format (1-mm/dd/yyyy, 2-dd/mm/yyyy, 3-yyyy/mm/dd) ",
                    ),
                ));
            }
            _ => {}
        }
        ScreenAction::Stay
    }

    pub fn status_lines(&self) -> Vec<Line<'static>> {
        match &self.prompt {
            Some((_, prompt)) => prompt_lines(prompt),
            None => vec![Line::raw(NUMBER_HINT), Line::raw("")],
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, opts: &GeneralOptions, attrs: Attributes) {
        let inner = config_window(area, buf, "general options", attrs);

        let flags = [
            ("auto_save", opts.auto_save, "(if set to YES, automatic save is done when quitting)"),
            (
                "confirm_quit",
                opts.confirm_quit,
                "(if set to YES, confirmation is required before quitting)",
            ),
            (
                "confirm_delete",
                opts.confirm_delete,
                "(if set to YES, confirmation is required before deleting an event)",
            ),
            (
                "skip_system_dialogs",
                opts.skip_system_dialogs,
                "(if set to YES, messages about loaded and saved data will not be displayed)",
            ),
            (
                "skip_progress_bar",
                opts.skip_progress_bar,
                "(if set to YES, progress bar will not be displayed when saving data)",
            ),
            (
                "week_begins_on_monday",
                opts.week_begins_on_monday,
                "(if set to YES, monday is the first day of the week, else it is sunday)",
            ),
        ];

        let x = 2;
        let mut y = 1;
        let mut number = 1;

        for (name, value, help) in flags {
            let label = format!("[{number}] {name} = ");
            put(buf, inner, x, y, &label, Style::default());
            put(buf, inner, x + label.len() as u16, y, yes_no(value), attrs.option(value));
            put(buf, inner, x, y + 1, help, Style::default());
            y += 3;
            number += 1;
        }

        let texts = [
            (
                "output_datefmt",
                opts.output_datefmt.clone(),
                "(Format of the date to be displayed in non-interactive mode)",
            ),
            (
                "input_datefmt",
                opts.input_datefmt.to_string(),
                "(Format to be used when entering a date: 1-mm/dd/yyyy, 2-dd/mm/yyyy, 3-yyyy/mm/dd)",
            ),
        ];

        for (name, value, help) in texts {
            let label = format!("[{number}] {name} = ");
            put(buf, inner, x, y, &label, Style::default());
            put(buf, inner, x + label.len() as u16, y, &value, attrs.style(Attr::Highest));
            put(buf, inner, x, y + 1, help, Style::default());
            y += 3;
            number += 1;
        }
    }
}

fn apply(field: Field, value: &str, opts: &mut GeneralOptions) {
    match field {
        Field::OutputDateFmt => {
            if !value.is_empty() {
                opts.output_datefmt = value.to_string();
            }
        }
        Field::InputDateFmt => {
            if let Some(format) = value
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(InputDateFormat::from_number)
            {
                opts.input_datefmt = format;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::prompt::tests::key;
    use pretty_assertions::assert_eq;

    fn type_and_submit(screen: &mut GeneralConfig, opts: &mut GeneralOptions, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)), opts);
        }
        screen.handle_key(key(KeyCode::Enter), opts);
    }

    #[test]
    fn test_number_keys_toggle_flags() {
        let mut opts = GeneralOptions::default();
        let mut screen = GeneralConfig::new();

        for c in ['1', '2', '3', '4', '5', '6'] {
            screen.handle_key(key(KeyCode::Char(c)), &mut opts);
        }

        assert!(!opts.auto_save);
        assert!(!opts.confirm_quit);
        assert!(!opts.confirm_delete);
        assert!(opts.skip_system_dialogs);
        assert!(opts.skip_progress_bar);
        assert!(opts.week_begins_on_monday);
    }

    #[test]
    fn test_output_format_prompt_is_prefilled() {
        let mut opts = GeneralOptions::default();
        let mut screen = GeneralConfig::new();

        screen.handle_key(key(KeyCode::Char('7')), &mut opts);
        assert!(screen.prompt.is_some());

        // Clear "%D" then type a new format.
        screen.handle_key(key(KeyCode::Backspace), &mut opts);
        screen.handle_key(key(KeyCode::Backspace), &mut opts);
        type_and_submit(&mut screen, &mut opts, "%F");

        assert!(screen.prompt.is_none());
        assert_eq!(opts.output_datefmt, "%F");
    }

    #[test]
    fn test_empty_output_format_keeps_value() {
        let mut opts = GeneralOptions::default();
        let mut screen = GeneralConfig::new();

        screen.handle_key(key(KeyCode::Char('7')), &mut opts);
        screen.handle_key(key(KeyCode::Backspace), &mut opts);
        screen.handle_key(key(KeyCode::Backspace), &mut opts);
        screen.handle_key(key(KeyCode::Enter), &mut opts);

        assert_eq!(opts.output_datefmt, "%D");
    }

    #[test]
    fn test_input_format_accepts_only_known_values() {
        let mut opts = GeneralOptions::default();
        let mut screen = GeneralConfig::new();

        screen.handle_key(key(KeyCode::Char('8')), &mut opts);
        type_and_submit(&mut screen, &mut opts, "3");
        assert_eq!(opts.input_datefmt, InputDateFormat::YearMonthDay);

        screen.handle_key(key(KeyCode::Char('8')), &mut opts);
        type_and_submit(&mut screen, &mut opts, "5");
        assert_eq!(opts.input_datefmt, InputDateFormat::YearMonthDay);
    }

    #[test]
    fn test_keys_go_to_prompt_while_prompting() {
        let mut opts = GeneralOptions::default();
        let mut screen = GeneralConfig::new();

        screen.handle_key(key(KeyCode::Char('8')), &mut opts);
        // 'q' is typed into the prompt instead of closing the screen.
        assert_eq!(screen.handle_key(key(KeyCode::Char('q')), &mut opts), ScreenAction::Stay);
        screen.handle_key(key(KeyCode::Esc), &mut opts);
        assert!(screen.prompt.is_none());
        assert_eq!(screen.handle_key(key(KeyCode::Char('q')), &mut opts), ScreenAction::Close);
    }
}
