//! Configuration module for listwalk.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides (applied by the caller)
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `LW_` and use double underscores
//! to separate nested levels:
//! - `LW_RUN__KEEP_GOING=true` sets `run.keep_going`
//! - `LW_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::lesson::FailurePolicy;

/// Directory holding the settings file, looked up from the working directory
/// towards the filesystem root.
pub const CONFIG_DIR: &str = ".listwalk";
pub const CONFIG_FILE: &str = "settings.toml";
pub const ENV_PREFIX: &str = "LW_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level applied to every module without an override
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module level overrides, e.g. `lesson = "debug"`
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct RunConfig {
    /// Continue past failing steps instead of stopping the lesson
    #[serde(default)]
    pub keep_going: bool,

    /// Emit a JSON envelope instead of plain lines
    #[serde(default)]
    pub json: bool,
}

fn default_version() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            logging: LoggingConfig::default(),
            run: RunConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: BTreeMap::new(),
        }
    }
}

impl RunConfig {
    pub fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::from_keep_going(self.keep_going)
    }
}

impl Settings {
    /// Load configuration from all sources, starting the settings file search
    /// at the current directory.
    pub fn load() -> Result<Self, ConfigError> {
        let current = std::env::current_dir()?;
        let config_path = Self::find_workspace_config(&current)
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file. A missing file contributes
    /// nothing; defaults and environment variables still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        tracing::debug!("loading settings from {}", path.as_ref().display());
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(path.as_ref()))
            // Double underscore separates nested levels, single underscore
            // stays inside field names
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".")
                    .into()
            }))
            .extract()
            .map_err(|e| ConfigError::Figment(Box::new(e)))
    }

    /// Find `.listwalk/settings.toml` in `start` or any of its ancestors.
    pub fn find_workspace_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Write a default settings file under `root`.
    pub fn init_config_file(root: &Path, force: bool) -> Result<PathBuf, ConfigError> {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err(ConfigError::AlreadyExists(
                config_path.display().to_string(),
            ));
        }

        Settings::default().save(&config_path)?;
        Ok(config_path)
    }
}
