// ABOUTME: Configuration management for anxcheck
// Handles config file locations, merging, and environment overrides

#![allow(dead_code)]

use dirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("Failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML
    #[error("Failed to parse config from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config could not be serialized for saving
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Config directory or file could not be written
    #[error("Failed to write config: {0}")]
    Write(#[source] std::io::Error),

    /// Home directory could not be determined
    #[error("Failed to get home directory")]
    NoHomeDir,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Whether the results screen shows the selected-trigger count
    #[serde(default = "default_true")]
    pub show_trigger_count: bool,

    /// Whether restarting the questionnaire asks for confirmation first
    #[serde(default)]
    pub confirm_restart: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            show_trigger_count: default_true(),
            confirm_restart: false,
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        // Try loading from multiple locations in order of precedence
        let config_paths = Self::get_config_paths();

        let mut config = Self::default();

        // Load each config file and merge
        for path in config_paths {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Read { path: path.clone(), source })?;

                let file_config: AppConfig = toml::from_str(&content)
                    .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;

                config.merge(file_config);
            }
        }

        config.load_from_env();

        Ok(config)
    }

    /// Save configuration to user config directory
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_dir = Self::get_user_config_dir()?;
        fs::create_dir_all(&config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).map_err(ConfigError::Write)?;

        Ok(())
    }

    /// Get configuration file paths in order of precedence
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".anxcheck").join("config.toml"));
        }

        // 2. User config (~/.anxcheck/config/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        // 3. System config
        paths.push(PathBuf::from("/etc/anxcheck/config.toml"));

        paths
    }

    /// Get user configuration directory
    fn get_user_config_dir() -> Result<PathBuf, ConfigError> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        let config_dir = home_dir.join(".anxcheck").join("config");
        Ok(config_dir)
    }

    /// Merge another config into this one
    fn merge(&mut self, other: AppConfig) {
        // Don't override version

        // A file only moves a preference away from its default
        if other.ui_preferences.show_trigger_count != default_true() {
            self.ui_preferences.show_trigger_count = other.ui_preferences.show_trigger_count;
        }
        if other.ui_preferences.confirm_restart {
            self.ui_preferences.confirm_restart = other.ui_preferences.confirm_restart;
        }
    }

    /// Apply ANXCHECK_* environment variable overrides
    fn load_from_env(&mut self) {
        self.apply_env_overrides(
            std::env::var("ANXCHECK_SHOW_TRIGGER_COUNT").ok(),
            std::env::var("ANXCHECK_CONFIRM_RESTART").ok(),
        );
    }

    /// Apply override values as read from the environment. Values that do not
    /// parse as booleans are ignored.
    fn apply_env_overrides(
        &mut self,
        show_trigger_count: Option<String>,
        confirm_restart: Option<String>,
    ) {
        if let Some(flag) = show_trigger_count.as_deref().and_then(parse_bool) {
            self.ui_preferences.show_trigger_count = flag;
        }
        if let Some(flag) = confirm_restart.as_deref().and_then(parse_bool) {
            self.ui_preferences.confirm_restart = flag;
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            ui_preferences: UiPreferences::default(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
