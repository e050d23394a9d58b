use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use folio_core::AppConfig;

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    write_default(config_path, force)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn write_default(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    AppConfig::default().save_to(config_path)?;
    info!("Wrote default config to {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_default(&path, false).unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntheme = \"nord\"\n").unwrap();

        assert!(write_default(&path, false).is_err());
        assert_eq!(AppConfig::load_from(&path).unwrap().ui.theme.name, "nord");

        write_default(&path, true).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap().ui.theme.name, "gruvbox-dark");
    }
}
