/// Application configuration: load, save and sanitize.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::history::HistoryConfig;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "UNDOREDO_CONFIG";

const CONFIG_FILE_NAME: &str = "undoredo.json";

const DEFAULT_LOG_FILTER: &str = "info";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub history: HistoryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            history: HistoryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `UNDOREDO_CONFIG` environment variable
    /// 2. `<config dir>/undoredo/undoredo.json`
    /// 3. `undoredo.json` in the working directory
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .map(|dir| dir.join("undoredo").join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads and sanitizes config from `path`, failing on any error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config: AppConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.sanitize();
        Ok(config)
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match Self::load(path) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("{e:#}"),
            }
            // Don't overwrite a broken file
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Resets invalid fields and cleans the history filter set.
    pub fn sanitize(&mut self) {
        if self.log_filter.trim().is_empty() {
            self.log_filter = DEFAULT_LOG_FILTER.to_string();
        }
        self.history.sanitize();
    }
}
