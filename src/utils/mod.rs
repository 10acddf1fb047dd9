//! Utility functions for editor-chart-gen

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "editor-chart-gen";

/// Configuration files looked up in the working directory, in order
pub const DEFAULT_CONFIG_FILES: [&str; 2] = [".editor-chart-gen.yaml", ".editor-chart-gen.yml"];

/// Get the XDG config directory for editor-chart-gen
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not determine config directory"))?
        .join(APP_NAME);

    Ok(config_dir)
}

/// First existing default configuration file, if any
pub fn find_default_config() -> Option<PathBuf> {
    find_config_in(Path::new("."), get_config_dir().ok().as_deref())
}

/// Look in `dir` for the default file names, then for `config.yaml` in `config_dir`
pub fn find_config_in(dir: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
    DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .chain(config_dir.map(|d| d.join("config.yaml")))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_dir_is_namespaced() {
        if let Ok(dir) = get_config_dir() {
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_config_lookup_order() {
        let work_dir = TempDir::new().unwrap();
        let xdg_dir = TempDir::new().unwrap();

        assert!(find_config_in(work_dir.path(), Some(xdg_dir.path())).is_none());

        let xdg_config = xdg_dir.path().join("config.yaml");
        std::fs::write(&xdg_config, "version: \"1.0\"\n").unwrap();
        assert_eq!(
            find_config_in(work_dir.path(), Some(xdg_dir.path())),
            Some(xdg_config)
        );

        let yml = work_dir.path().join(".editor-chart-gen.yml");
        std::fs::write(&yml, "version: \"1.0\"\n").unwrap();
        assert_eq!(
            find_config_in(work_dir.path(), Some(xdg_dir.path())),
            Some(yml)
        );

        let yaml = work_dir.path().join(".editor-chart-gen.yaml");
        std::fs::write(&yaml, "version: \"1.0\"\n").unwrap();
        assert_eq!(
            find_config_in(work_dir.path(), Some(xdg_dir.path())),
            Some(yaml)
        );
    }

    #[test]
    fn test_config_lookup_without_config_dir() {
        let work_dir = TempDir::new().unwrap();
        assert!(find_config_in(work_dir.path(), None).is_none());
    }
}
