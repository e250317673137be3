//! Window attributes for color and monochrome terminals.
//!
//! - `Highest`: window titles
//! - `High`: month and day names
//! - `Middle`: the selected day inside the calendar panel
//! - `Low`: days of the calendar panel holding an event
//! - `Lowest`: the current day inside the calendar panel
//! - `True` / `False`: option values

use daybook_core::config::{ColorTheme, ThemeColor};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Attr {
    Highest,
    High,
    Middle,
    Low,
    Lowest,
    True,
    False,
}

pub(crate) fn term_color(color: ThemeColor) -> Color {
    match color {
        ThemeColor::Black => Color::Black,
        ThemeColor::Red => Color::Red,
        ThemeColor::Green => Color::Green,
        ThemeColor::Yellow => Color::Yellow,
        ThemeColor::Blue => Color::Blue,
        ThemeColor::Magenta => Color::Magenta,
        ThemeColor::Cyan => Color::Cyan,
        ThemeColor::White => Color::Gray,
        ThemeColor::Default => Color::Reset,
    }
}

/// Styles derived from the current color theme.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Attributes {
    theme: ColorTheme,
}

impl Attributes {
    pub fn new(theme: ColorTheme) -> Self {
        Attributes { theme }
    }

    pub fn style(&self, attr: Attr) -> Style {
        if self.theme.colorize {
            self.color(attr)
        } else {
            Self::nocolor(attr)
        }
    }

    /// Style used to print a boolean option value.
    pub fn option(&self, value: bool) -> Style {
        self.style(if value { Attr::True } else { Attr::False })
    }

    fn color(&self, attr: Attr) -> Style {
        match attr {
            Attr::Highest => Style::default()
                .fg(term_color(self.theme.fore))
                .bg(term_color(self.theme.back)),
            Attr::High => Style::default().fg(Color::Black).bg(Color::Green),
            Attr::Middle => Style::default().fg(Color::Red),
            Attr::Low => Style::default().fg(Color::Cyan),
            Attr::Lowest => Style::default().fg(Color::Yellow),
            Attr::True => Style::default().fg(Color::Green),
            Attr::False => Style::default().fg(Color::Red),
        }
    }

    fn nocolor(attr: Attr) -> Style {
        let modifier = match attr {
            Attr::Highest => Modifier::BOLD,
            Attr::High => Modifier::REVERSED,
            Attr::Middle => Modifier::REVERSED,
            Attr::Low => Modifier::UNDERLINED,
            Attr::Lowest => Modifier::BOLD,
            Attr::True => Modifier::BOLD,
            Attr::False => Modifier::DIM,
        };
        Style::default().add_modifier(modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_follow_theme() {
        let attrs = Attributes::new(ColorTheme::new(ThemeColor::Yellow, ThemeColor::Blue));
        let style = attrs.style(Attr::Highest);
        assert_eq!(style.fg, Some(Color::Yellow));
        assert_eq!(style.bg, Some(Color::Blue));
    }

    #[test]
    fn test_monochrome_uses_modifiers() {
        let theme = ColorTheme {
            colorize: false,
            ..ColorTheme::default()
        };
        let attrs = Attributes::new(theme);

        assert_eq!(attrs.style(Attr::Highest).fg, None);
        assert!(attrs.style(Attr::Middle).add_modifier.contains(Modifier::REVERSED));
        assert!(attrs.style(Attr::Low).add_modifier.contains(Modifier::UNDERLINED));
        assert!(attrs.option(false).add_modifier.contains(Modifier::DIM));
    }
}
