use std::path::Path;

use anyhow::{Context, Result};
use daybook_core::Daybook;
use daybook_core::config::legacy;
use owo_colors::OwoColorize;

/// Convert a line-oriented configuration file and save it as the TOML config.
pub fn run(daybook: &mut Daybook, path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    let mut conf = legacy::parse(&text)?;
    // The legacy format has no data directory.
    conf.data_dir = daybook.conf().data_dir.clone();
    daybook.set_conf(conf);
    daybook.save_conf()?;

    println!(
        "{} {} -> {}",
        "Imported".green(),
        path.display(),
        daybook.config_path().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybook_core::config::Layout;

    #[test]
    fn test_import_keeps_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "data_dir = \"/srv/daybook\"\n").unwrap();
        let legacy_path = dir.path().join("conf");
        std::fs::write(&legacy_path, "layout=\n4\nconfirm_quit=\nno\n").unwrap();

        let mut daybook = Daybook::load_from(&config_path).unwrap();
        run(&mut daybook, &legacy_path).unwrap();

        let reloaded = Daybook::load_from(&config_path).unwrap();
        assert_eq!(reloaded.conf().appearance.layout, Layout::new(4).unwrap());
        assert!(!reloaded.conf().general.confirm_quit);
        assert_eq!(reloaded.display_path(), std::path::PathBuf::from("/srv/daybook"));
    }

    #[test]
    fn test_import_rejects_bad_boolean() {
        let dir = tempfile::tempdir().unwrap();
        let legacy_path = dir.path().join("conf");
        std::fs::write(&legacy_path, "auto_save=\nmaybe\n").unwrap();

        let mut daybook = Daybook::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(run(&mut daybook, &legacy_path).is_err());
        assert!(!dir.path().join("config.toml").exists());
    }
}
