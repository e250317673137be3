//! Color theme and panel layout settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DaybookError, DaybookResult};

/// A terminal color a theme can use. `Default` is the terminal's own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Default,
}

impl ThemeColor {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeColor::Black => "black",
            ThemeColor::Red => "red",
            ThemeColor::Green => "green",
            ThemeColor::Yellow => "yellow",
            ThemeColor::Blue => "blue",
            ThemeColor::Magenta => "magenta",
            ThemeColor::Cyan => "cyan",
            ThemeColor::White => "white",
            ThemeColor::Default => "default",
        }
    }
}

impl FromStr for ThemeColor {
    type Err = DaybookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(ThemeColor::Black),
            "red" => Ok(ThemeColor::Red),
            "green" => Ok(ThemeColor::Green),
            "yellow" => Ok(ThemeColor::Yellow),
            "blue" => Ok(ThemeColor::Blue),
            "magenta" => Ok(ThemeColor::Magenta),
            "cyan" => Ok(ThemeColor::Cyan),
            "white" => Ok(ThemeColor::White),
            "default" => Ok(ThemeColor::Default),
            other => Err(DaybookError::ColorTheme(format!("unknown color name '{other}'"))),
        }
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Foreground/background pair used for titles, or no colors at all.
///
/// Text form is `"<fore> on <back>"`, or `"0"` when colors are disabled.
/// Single digits 1-8 are accepted for old configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorTheme {
    pub colorize: bool,
    pub fore: ThemeColor,
    pub back: ThemeColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        ColorTheme::new(ThemeColor::Red, ThemeColor::Default)
    }
}

impl ColorTheme {
    pub fn new(fore: ThemeColor, back: ThemeColor) -> Self {
        ColorTheme {
            colorize: true,
            fore,
            back,
        }
    }

    /// Name written to the configuration file.
    pub fn name(&self) -> String {
        if self.colorize {
            format!("{} on {}", self.fore, self.back)
        } else {
            "0".to_string()
        }
    }

    pub fn parse(s: &str) -> DaybookResult<Self> {
        let s = s.trim();

        match s.len() {
            0 => Err(DaybookError::ColorTheme("empty color theme".into())),
            1 => Self::from_number(s),
            _ => {
                let words: Vec<&str> = s.split_whitespace().collect();
                match words.as_slice() {
                    [fore, "on", back] => Ok(ColorTheme::new(fore.parse()?, back.parse()?)),
                    _ => Err(DaybookError::ColorTheme(format!(
                        "missing colors in '{s}', expected '<color> on <color>'"
                    ))),
                }
            }
        }
    }

    fn from_number(s: &str) -> DaybookResult<Self> {
        use ThemeColor::*;

        let theme = match s {
            "0" => ColorTheme {
                colorize: false,
                ..ColorTheme::default()
            },
            "1" => ColorTheme::new(Red, Default),
            "2" => ColorTheme::new(Green, Default),
            "3" => ColorTheme::new(Blue, Default),
            "4" => ColorTheme::new(Cyan, Default),
            "5" => ColorTheme::new(Yellow, Default),
            "6" => ColorTheme::new(Black, Green),
            "7" => ColorTheme::new(Black, Yellow),
            "8" => ColorTheme::new(Red, Blue),
            other => {
                return Err(DaybookError::ColorTheme(format!(
                    "wrong color number '{other}'"
                )));
            }
        };

        Ok(theme)
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl TryFrom<String> for ColorTheme {
    type Error = DaybookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ColorTheme::parse(&value)
    }
}

impl From<ColorTheme> for String {
    fn from(theme: ColorTheme) -> Self {
        theme.name()
    }
}

/// One of eight panel arrangements, numbered 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Layout(u8);

impl Layout {
    pub const COUNT: u8 = 8;

    pub fn new(number: u8) -> Option<Self> {
        (1..=Self::COUNT).contains(&number).then_some(Layout(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout(1)
    }
}

impl From<i64> for Layout {
    /// Out of range numbers fall back to the first layout.
    fn from(value: i64) -> Self {
        u8::try_from(value)
            .ok()
            .and_then(Layout::new)
            .unwrap_or_default()
    }
}

impl From<Layout> for i64 {
    fn from(layout: Layout) -> Self {
        layout.0 as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_named_theme() {
        let theme = ColorTheme::parse("yellow on blue").unwrap();
        assert!(theme.colorize);
        assert_eq!(theme.fore, ThemeColor::Yellow);
        assert_eq!(theme.back, ThemeColor::Blue);
        assert_eq!(theme.name(), "yellow on blue");
    }

    #[test]
    fn test_parse_default_background() {
        let theme = ColorTheme::parse("cyan on default").unwrap();
        assert_eq!(theme.back, ThemeColor::Default);
    }

    #[test]
    fn test_parse_legacy_numbers() {
        assert!(!ColorTheme::parse("0").unwrap().colorize);
        assert_eq!(
            ColorTheme::parse("6").unwrap(),
            ColorTheme::new(ThemeColor::Black, ThemeColor::Green)
        );
        assert_eq!(
            ColorTheme::parse("8").unwrap(),
            ColorTheme::new(ThemeColor::Red, ThemeColor::Blue)
        );
        assert!(ColorTheme::parse("9").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(ColorTheme::parse("").is_err());
        assert!(ColorTheme::parse("red").is_err());
        assert!(ColorTheme::parse("red over blue").is_err());
        assert!(ColorTheme::parse("purple on default").is_err());
    }

    #[test]
    fn test_disabled_theme_name() {
        let theme = ColorTheme {
            colorize: false,
            ..ColorTheme::default()
        };
        assert_eq!(theme.name(), "0");
    }

    #[test]
    fn test_layout_bounds() {
        assert_eq!(Layout::new(8).map(|l| l.number()), Some(8));
        assert!(Layout::new(0).is_none());
        assert!(Layout::new(9).is_none());
        assert_eq!(Layout::from(12).number(), 1);
        assert_eq!(Layout::from(-3).number(), 1);
        assert_eq!(Layout::from(4).number(), 4);
    }
}
