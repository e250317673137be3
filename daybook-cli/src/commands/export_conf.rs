use std::path::Path;

use anyhow::{Context, Result};
use daybook_core::Daybook;
use daybook_core::config::legacy;
use owo_colors::OwoColorize;

/// Write the current configuration in the old line-oriented format.
pub fn run(daybook: &Daybook, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }
    std::fs::write(path, legacy::render(daybook.conf()))
        .with_context(|| format!("Could not write {}", path.display()))?;

    println!(
        "{} {} -> {}",
        "Exported".green(),
        daybook.config_path().display(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::import_conf;
    use daybook_core::config::{ColorTheme, Layout, ThemeColor};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_export_then_import_keeps_settings() {
        let dir = tempfile::tempdir().unwrap();
        let mut daybook = Daybook::load_from(&dir.path().join("config.toml")).unwrap();
        daybook.conf_mut().appearance.layout = Layout::new(6).unwrap();
        daybook.conf_mut().appearance.color_theme =
            ColorTheme::new(ThemeColor::Cyan, ThemeColor::Black);
        daybook.conf_mut().notify_bar.warning = 45;

        let legacy_path = dir.path().join("old").join("conf");
        run(&daybook, &legacy_path).unwrap();

        let text = std::fs::read_to_string(&legacy_path).unwrap();
        assert!(text.contains("layout=\n6\n"));

        let mut other = Daybook::load_from(&dir.path().join("other.toml")).unwrap();
        import_conf::run(&mut other, &legacy_path).unwrap();
        assert_eq!(other.conf(), daybook.conf());
    }
}
