//! Color theme screen: a foreground and a background column of colors.
//!
//! The cursor walks indexes 0..14. Indexes up to `USER_COLORS` are the
//! foreground column, the rest the background column; the last entry of
//! each column is the terminal's default color.

use crossterm::event::{KeyCode, KeyEvent};
use daybook_core::config::{ColorTheme, ThemeColor};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use super::{ScreenAction, config_window, put};
use crate::tui::attr::{Attr, Attributes, term_color};

const PICKER: [ThemeColor; 7] = [
    ThemeColor::Red,
    ThemeColor::Green,
    ThemeColor::Yellow,
    ThemeColor::Blue,
    ThemeColor::Magenta,
    ThemeColor::Cyan,
    ThemeColor::Default,
];
const USER_COLORS: usize = 6;
const SIZE: usize = 2 * (USER_COLORS + 1);

const BAR: &str = "          ";
const BOX: &str = "[ ]";
const BAR_OFFSET: u16 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColorConfig {
    cursor: usize,
    mark_fore: usize,
    mark_back: usize,
}

fn color_at(index: usize) -> ThemeColor {
    PICKER[index % (USER_COLORS + 1)]
}

impl ColorConfig {
    /// Marks start on the current theme. Colors missing from the picker, or
    /// a disabled theme, leave the marks on the default entries.
    pub fn new(theme: &ColorTheme) -> Self {
        let mut screen = ColorConfig {
            cursor: 0,
            mark_fore: USER_COLORS,
            mark_back: SIZE - 1,
        };

        if theme.colorize {
            if let Some(i) = PICKER.iter().position(|c| *c == theme.fore) {
                screen.mark_fore = i;
            }
            if let Some(i) = PICKER.iter().position(|c| *c == theme.back) {
                screen.mark_back = USER_COLORS + 1 + i;
            }
        }
        screen
    }

    pub fn handle_key(&mut self, key: KeyEvent, theme: &mut ColorTheme) -> ScreenAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return ScreenAction::Close,
            KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Char('X') => {
                if self.cursor > USER_COLORS {
                    self.mark_back = self.cursor;
                } else {
                    self.mark_fore = self.cursor;
                }
                *theme = ColorTheme::new(color_at(self.mark_fore), color_at(self.mark_back));
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
                if self.cursor < SIZE - 1 {
                    self.cursor += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
                if self.cursor > USER_COLORS {
                    self.cursor -= USER_COLORS + 1;
                }
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
                if self.cursor <= USER_COLORS {
                    self.cursor += USER_COLORS + 1;
                }
            }
            KeyCode::Char('0') => theme.colorize = false,
            _ => {}
        }
        ScreenAction::Stay
    }

    pub fn status_lines() -> Vec<Line<'static>> {
        vec![
            Line::raw("Use 'X' or SPACE to select a color, 'H/L' 'J/K' or arrow keys to move"),
            Line::raw("('0' for no color, 'Q' to exit) :"),
        ]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &ColorTheme, attrs: Attributes) {
        let inner = config_window(area, buf, "color theme", attrs);

        let col_width = BAR_OFFSET + BAR.len() as u16;
        let x_spacing = inner.width.saturating_sub(2 * col_width) / 3;
        let x_fore = x_spacing;
        let x_back = 2 * x_spacing + col_width;
        let y_spacing = (inner.height.saturating_sub(4) / (USER_COLORS as u16 + 1)).max(1);

        let position = |i: usize| {
            let row = (i % (USER_COLORS + 1)) as u16;
            let x = if i > USER_COLORS { x_back } else { x_fore };
            (x, 1 + y_spacing * (row + 1))
        };

        let title = attrs.style(Attr::Highest);
        put(buf, inner, x_fore + BAR_OFFSET, 0, "Foreground", title);
        put(buf, inner, x_back + BAR_OFFSET, 0, "Background", title);

        for i in 0..SIZE {
            let (x, y) = position(i);
            put(buf, inner, x, y, BOX, Style::default());

            let color = color_at(i);
            let bar = if color == ThemeColor::Default {
                Style::default()
            } else {
                Style::default().bg(term_color(color))
            };
            put(buf, inner, x + BAR_OFFSET, y, BAR, bar);

            if color == ThemeColor::Default {
                put(buf, inner, x + BAR_OFFSET, y + 1, "(terminal's default)", Style::default());
            }
        }

        if theme.colorize {
            for mark in [self.mark_fore, self.mark_back] {
                let (x, y) = position(mark);
                put(buf, inner, x + 1, y, "X", Style::default());
            }
        }

        let (x, y) = position(self.cursor);
        let marked = theme.colorize && (self.cursor == self.mark_fore || self.cursor == self.mark_back);
        let cursor = if marked { "X" } else { " " };
        put(buf, inner, x + 1, y, cursor, Style::default().add_modifier(Modifier::REVERSED));
    }
}
