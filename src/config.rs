//! Configuration loading and management
//!
//! Handles parsing of `.taskman.toml` configuration files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_UPCOMING_DAYS;

/// Name of the configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = ".taskman.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Storage-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the task file
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

fn default_file() -> PathBuf {
    PathBuf::from(crate::store::DEFAULT_FILE)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Window for the upcoming-tasks page, in days
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u64,
}

fn default_upcoming_days() -> u64 {
    DEFAULT_UPCOMING_DAYS
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            upcoming_days: default_upcoming_days(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    fn validate(&self) -> crate::error::Result<()> {
        if self.storage.file.as_os_str().is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "storage.file cannot be empty".to_string(),
            ));
        }
        if self.ui.upcoming_days == 0 {
            return Err(crate::error::Error::InvalidConfig(
                "ui.upcoming_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the task file path: explicit override wins over config.
    pub fn task_file(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.storage.file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_tasks_json() {
        let config = Config::default();
        assert_eq!(config.storage.file, PathBuf::from("tasks.json"));
        assert_eq!(config.ui.upcoming_days, 7);
    }

    #[test]
    fn load_parses_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        let content = r#"
[storage]
file = "my-tasks.json"

[ui]
upcoming_days = 14
"#;
        std::fs::write(&path, content).expect("write");

        let config = Config::load(&path).expect("load");
        assert_eq!(config.storage.file, PathBuf::from("my-tasks.json"));
        assert_eq!(config.ui.upcoming_days, 14);
    }

    #[test]
    fn load_from_dir_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load_from_dir(dir.path());
        assert_eq!(config.storage.file, PathBuf::from("tasks.json"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[ui]\nupcoming_days = 0\n").expect("write");
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn task_file_prefers_override() {
        let config = Config::default();
        let override_path = PathBuf::from("/tmp/elsewhere.json");
        assert_eq!(config.task_file(Some(&override_path)), override_path);
        assert_eq!(config.task_file(None), PathBuf::from("tasks.json"));
    }
}
