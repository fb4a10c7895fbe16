use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use userdb_store::WriteMode;

use crate::paths::get_config_path;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store file used when `--fileName` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_file: Option<String>,
    /// Write a sibling temp file and rename it over the store instead of
    /// truncating in place.
    #[serde(default)]
    pub atomic_writes: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.store.atomic_writes {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        }
    }

    /// The configured default store file, if one is set and non-empty.
    pub fn default_file(&self) -> Option<&str> {
        self.store
            .default_file
            .as_deref()
            .filter(|f| !f.is_empty())
    }
}
