//! Layout picker.

use crossterm::event::{KeyCode, KeyEvent};
use daybook_core::config::Layout;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;

use super::{ScreenAction, config_window, put};
use crate::tui::attr::{Attr, Attributes};
use crate::tui::panels::diagram;

const COLUMN_WIDTH: u16 = 9;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LayoutConfig;

impl LayoutConfig {
    /// `1`-`8` picks a layout and closes, `q` closes without change.
    pub fn handle_key(&self, key: KeyEvent, layout: &mut Layout) -> ScreenAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenAction::Close,
            KeyCode::Char(c) => match c.to_digit(10).and_then(|d| Layout::new(d as u8)) {
                Some(picked) => {
                    *layout = picked;
                    ScreenAction::Close
                }
                None => ScreenAction::Stay,
            },
            _ => ScreenAction::Stay,
        }
    }

    pub fn status_lines() -> Vec<Line<'static>> {
        vec![
            Line::raw("Pick the desired layout [1-8] ('q' to exit)"),
            Line::raw("('E'= events panel, 'C'= calendar panel, 'N'= note panel)"),
        ]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, current: Layout, attrs: Attributes) {
        let inner = config_window(area, buf, "layout", attrs);

        for n in 1..=Layout::COUNT {
            let Some(layout) = Layout::new(n) else {
                continue;
            };
            let [top, bottom] = diagram(layout);
            let style = if layout == current {
                attrs.style(Attr::Highest)
            } else {
                Style::default()
            };

            let x = 2 + (n as u16 - 1) * COLUMN_WIDTH;
            put(buf, inner, x, 2, &format!("   {top}"), style);
            put(buf, inner, x, 3, &format!("[{n}]{bottom}"), style);
        }
    }
}
