//! Modal configuration screens reached from the config bar.

mod color;
mod general;
mod layout;
mod notify;

use crossterm::event::{KeyCode, KeyEvent};
use daybook_core::config::Conf;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

pub(crate) use color::ColorConfig;
pub(crate) use general::GeneralConfig;
pub(crate) use layout::LayoutConfig;
pub(crate) use notify::NotifyConfig;

use super::attr::{Attr, Attributes};
use super::notify_bar::NotifyBar;
use super::prompt::LinePrompt;

/// What a screen wants after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScreenAction {
    Stay,
    Close,
}

pub(crate) enum ConfigScreen {
    Menu,
    General(GeneralConfig),
    Layout(LayoutConfig),
    Color(ColorConfig),
    Notify(NotifyConfig),
}

impl ConfigScreen {
    /// Handle a key. `Close` from the menu means leaving configuration.
    pub fn handle_key(&mut self, key: KeyEvent, conf: &mut Conf, notify: &NotifyBar) -> ScreenAction {
        if self.is_menu() {
            return self.handle_menu_key(key, conf);
        }

        let action = match self {
            ConfigScreen::Menu => ScreenAction::Stay,
            ConfigScreen::General(screen) => screen.handle_key(key, &mut conf.general),
            ConfigScreen::Layout(screen) => screen.handle_key(key, &mut conf.appearance.layout),
            ConfigScreen::Color(screen) => screen.handle_key(key, &mut conf.appearance.color_theme),
            ConfigScreen::Notify(screen) => screen.handle_key(key, notify),
        };

        if action == ScreenAction::Close {
            *self = ConfigScreen::Menu;
        }
        ScreenAction::Stay
    }

    fn handle_menu_key(&mut self, key: KeyEvent, conf: &Conf) -> ScreenAction {
        let KeyCode::Char(c) = key.code else {
            return if key.code == KeyCode::Esc {
                ScreenAction::Close
            } else {
                ScreenAction::Stay
            };
        };

        match c.to_ascii_lowercase() {
            'q' => return ScreenAction::Close,
            'g' => *self = ConfigScreen::General(GeneralConfig::new()),
            'l' => *self = ConfigScreen::Layout(LayoutConfig),
            'c' => *self = ConfigScreen::Color(ColorConfig::new(&conf.appearance.color_theme)),
            'n' => *self = ConfigScreen::Notify(NotifyConfig::new()),
            _ => {}
        }
        ScreenAction::Stay
    }

    /// The menu draws nothing: the main panels stay visible behind the bar.
    pub fn is_menu(&self) -> bool {
        matches!(self, ConfigScreen::Menu)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, conf: &Conf, notify: &NotifyBar) {
        let attrs = Attributes::new(conf.appearance.color_theme);
        match self {
            ConfigScreen::Menu => {}
            ConfigScreen::General(screen) => screen.render(area, buf, &conf.general, attrs),
            ConfigScreen::Layout(screen) => screen.render(area, buf, conf.appearance.layout, attrs),
            ConfigScreen::Color(screen) => screen.render(area, buf, &conf.appearance.color_theme, attrs),
            ConfigScreen::Notify(screen) => screen.render(area, buf, notify, attrs),
        }
    }

    /// Two lines for the status bar.
    pub fn status_lines(&self, attrs: Attributes) -> Vec<Line<'static>> {
        match self {
            ConfigScreen::Menu => config_bar(attrs),
            ConfigScreen::General(screen) => screen.status_lines(),
            ConfigScreen::Layout(_) => LayoutConfig::status_lines(),
            ConfigScreen::Color(_) => ColorConfig::status_lines(),
            ConfigScreen::Notify(screen) => screen.status_lines(),
        }
    }
}

/// Key hints of the configuration menu.
fn config_bar(attrs: Attributes) -> Vec<Line<'static>> {
    let key = attrs.style(Attr::Highest);
    let entry = |k: &'static str, label: &'static str| {
        vec![
            Span::styled(k, key),
            Span::raw(format!(" {label:<12}")),
        ]
    };

    vec![
        Line::from([entry("Q", "Exit"), entry("L", "Layout"), entry("N", "Notify")].concat()),
        Line::from([entry("G", "General"), entry("C", "Color")].concat()),
    ]
}

/// Prompt rendered on the two status lines.
pub(crate) fn prompt_lines(prompt: &LinePrompt) -> Vec<Line<'static>> {
    vec![
        Line::raw(prompt.label().to_string()),
        Line::raw(format!("{}_", prompt.input())),
    ]
}

/// Draw the bordered configuration window and return its inner area.
pub(crate) fn config_window(area: Rect, buf: &mut Buffer, label: &str, attrs: Attributes) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" daybook {} | {} ", env!("CARGO_PKG_VERSION"), label),
            attrs.style(Attr::Highest),
        ));
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Write `text` at (`x`, `y`) relative to `area`, clipped to it.
pub(crate) fn put(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, style: Style) {
    if x >= area.width || y >= area.height {
        return;
    }
    let max_width = (area.width - x) as usize;
    buf.set_stringn(area.x + x, area.y + y, text, max_width, style);
}
