//! User configuration.
//!
//! Stored as TOML at `~/.config/daybook/config.toml`. Old line-oriented
//! configuration files can be converted with [`legacy::parse`].

mod appearance;
mod general;
pub mod legacy;
mod notify;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DaybookError, DaybookResult};

pub use appearance::{ColorTheme, Layout, ThemeColor};
pub use general::{GeneralOptions, InputDateFormat};
pub use notify::NotifyConf;

static DEFAULT_DATA_PATH: &str = "~/.daybook";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Colors and panel arrangement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub color_theme: ColorTheme,
    pub layout: Layout,
}

/// All user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conf {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub general: GeneralOptions,

    #[serde(default)]
    pub appearance: Appearance,

    #[serde(default)]
    pub notify_bar: NotifyConf,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            data_dir: default_data_dir(),
            general: GeneralOptions::default(),
            appearance: Appearance::default(),
            notify_bar: NotifyConf::default(),
        }
    }
}

impl Conf {
    pub fn config_path() -> DaybookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaybookError::Config("Could not determine config directory".into()))?
            .join("daybook");

        Ok(config_dir.join("config.toml"))
    }

    /// Write the config as TOML to `path`.
    pub fn save_to(&self, path: &Path) -> DaybookResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DaybookError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaybookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| DaybookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DaybookResult<()> {
        let defaults = Conf::default();
        let contents = format!(
            "\
# daybook configuration

# Where events and notes live:
# data_dir = \"{data}\"

[general]
# auto_save = {auto_save}
# confirm_quit = {confirm_quit}
# confirm_delete = {confirm_delete}
# skip_system_dialogs = {skip_system_dialogs}
# skip_progress_bar = {skip_progress_bar}
# week_begins_on_monday = {monday}
# output_datefmt = \"{output}\"
# 1 = mm/dd/yyyy, 2 = dd/mm/yyyy, 3 = yyyy/mm/dd
# input_datefmt = {input}

[appearance]
# color_theme = \"{theme}\"
# layout = {layout}

[notify_bar]
# show = {show}
# date = \"{date}\"
# clock = \"{clock}\"
# warning = {warning}
# command = {command}
",
            data = DEFAULT_DATA_PATH,
            auto_save = defaults.general.auto_save,
            confirm_quit = defaults.general.confirm_quit,
            confirm_delete = defaults.general.confirm_delete,
            skip_system_dialogs = defaults.general.skip_system_dialogs,
            skip_progress_bar = defaults.general.skip_progress_bar,
            monday = defaults.general.week_begins_on_monday,
            output = defaults.general.output_datefmt,
            input = defaults.general.input_datefmt,
            theme = defaults.appearance.color_theme,
            layout = defaults.appearance.layout.number(),
            show = defaults.notify_bar.show,
            date = defaults.notify_bar.date,
            clock = defaults.notify_bar.clock,
            warning = defaults.notify_bar.warning,
            command = toml::Value::String(defaults.notify_bar.command.clone()),
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaybookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DaybookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let conf: Conf = toml::from_str(
            r#"
[general]
confirm_quit = false
input_datefmt = 7

[appearance]
color_theme = "green on black"
"#,
        )
        .unwrap();

        assert!(!conf.general.confirm_quit);
        assert!(conf.general.auto_save);
        assert_eq!(conf.general.input_datefmt, InputDateFormat::MonthDayYear);
        assert_eq!(
            conf.appearance.color_theme,
            ColorTheme::new(ThemeColor::Green, ThemeColor::Black)
        );
        assert_eq!(conf.appearance.layout, Layout::default());
        assert_eq!(conf.notify_bar, NotifyConf::default());
        assert_eq!(conf.data_dir, default_data_dir());
    }

    #[test]
    fn test_bad_theme_is_rejected() {
        let result: Result<Conf, _> = toml::from_str(
            r#"
[appearance]
color_theme = "mauve on default"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_save_to_skips_default_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut conf = Conf::default();
        conf.appearance.layout = Layout::new(5).unwrap();
        conf.save_to(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("data_dir"));
        assert!(text.contains("layout = 5"));
        assert!(text.contains("color_theme = \"red on default\""));

        let reread: Conf = toml::from_str(&text).unwrap();
        assert_eq!(reread, conf);
    }

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Conf::create_default_config(&path).unwrap();
        let conf: Conf = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(conf, Conf::default());
    }

    #[test]
    fn test_default_config_lists_every_option() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Conf::create_default_config(&path).unwrap();

        // Uncomment the option lines, leaving prose comments alone.
        let uncommented: String = std::fs::read_to_string(&path)
            .unwrap()
            .lines()
            .map(|line| match line.strip_prefix("# ") {
                Some(rest)
                    if rest.starts_with(|c: char| c.is_ascii_lowercase())
                        && rest.contains(" = ") =>
                {
                    rest
                }
                _ => line,
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert!(uncommented.contains("\ncommand = "));
        let conf: Conf = toml::from_str(&uncommented).unwrap();
        assert_eq!(conf, Conf::default());
    }
}
