//! Daybook root: configuration plus the data directory it points at.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};

use crate::config::Conf;
use crate::error::{DaybookError, DaybookResult};
use crate::event_list::EventList;
use crate::note::NoteStore;

const EVENTS_FILE: &str = "events";
const NOTES_DIR: &str = "notes";

#[derive(Debug, Clone)]
pub struct Daybook {
    conf: Conf,
    config_path: PathBuf,
    /// Session-only data directory, never written back to the config
    data_dir_override: Option<PathBuf>,
}

impl Daybook {
    /// Load from the default location, creating a commented config file on
    /// first run.
    pub fn load() -> DaybookResult<Self> {
        let config_path = Conf::config_path()?;

        if !config_path.exists() {
            Conf::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit config file. A missing file yields defaults.
    pub fn load_from(config_path: &Path) -> DaybookResult<Self> {
        let conf: Conf = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml).required(false))
            .build()
            .map_err(|e| DaybookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DaybookError::Config(e.to_string()))?;

        tracing::debug!(path = %config_path.display(), "loaded configuration");

        Ok(Daybook {
            conf,
            config_path: config_path.to_path_buf(),
            data_dir_override: None,
        })
    }

    pub fn conf(&self) -> &Conf {
        &self.conf
    }

    pub fn conf_mut(&mut self) -> &mut Conf {
        &mut self.conf
    }

    pub fn set_conf(&mut self, conf: Conf) {
        self.conf = conf;
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Point at another data directory for this session only.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        self.data_dir_override = Some(dir);
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.display_path().to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the data directory in display-friendly form, keeping `~`.
    pub fn display_path(&self) -> PathBuf {
        self.data_dir_override
            .clone()
            .unwrap_or_else(|| self.conf.data_dir.clone())
    }

    pub fn events_path(&self) -> PathBuf {
        self.data_path().join(EVENTS_FILE)
    }

    pub fn notes(&self) -> NoteStore {
        NoteStore::new(self.data_path().join(NOTES_DIR))
    }

    pub fn load_events(&self) -> DaybookResult<EventList> {
        EventList::load_file(&self.events_path())
    }

    pub fn save_events(&self, events: &EventList) -> DaybookResult<()> {
        events.save(&self.events_path())
    }

    pub fn save_conf(&self) -> DaybookResult<()> {
        self.conf.save_to(&self.config_path)?;
        tracing::info!(path = %self.config_path.display(), "saved configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Layout, ThemeColor};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let daybook = Daybook::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(daybook.conf(), &Conf::default());
    }

    #[test]
    fn test_load_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/elsewhere\"\n[appearance]\ncolor_theme = \"white on blue\"\nlayout = 6\n",
        )
        .unwrap();

        let daybook = Daybook::load_from(&path).unwrap();
        let theme = daybook.conf().appearance.color_theme;
        assert_eq!(theme.fore, ThemeColor::White);
        assert_eq!(theme.back, ThemeColor::Blue);
        assert_eq!(daybook.conf().appearance.layout, Layout::new(6).unwrap());
        assert_eq!(daybook.data_path(), PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn test_save_conf_then_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut daybook = Daybook::load_from(&path).unwrap();
        daybook.conf_mut().general.confirm_quit = false;
        daybook.conf_mut().notify_bar.warning = 60;
        daybook.save_conf().unwrap();

        let reloaded = Daybook::load_from(&path).unwrap();
        assert_eq!(reloaded.conf(), daybook.conf());
    }

    #[test]
    fn test_events_live_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut daybook = Daybook::load_from(&dir.path().join("config.toml")).unwrap();
        daybook.set_data_dir(dir.path().join("data"));

        let mut events = EventList::new();
        events.add("Dentist", None, NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(), 1);
        daybook.save_events(&events).unwrap();

        assert!(dir.path().join("data").join("events").exists());
        assert_eq!(daybook.load_events().unwrap().len(), 1);
        assert_eq!(daybook.notes().dir(), dir.path().join("data").join("notes"));
    }

    #[test]
    fn test_data_dir_override_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut daybook = Daybook::load_from(&path).unwrap();
        daybook.set_data_dir(dir.path().join("session"));
        daybook.save_conf().unwrap();

        let reloaded = Daybook::load_from(&path).unwrap();
        assert_eq!(reloaded.display_path(), PathBuf::from("~/.daybook"));
        assert_eq!(daybook.data_path(), dir.path().join("session"));
    }
}
