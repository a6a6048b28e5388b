//! Configuration module for the lext CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the lext application.
//!
//! # Configuration File Format
//!
//! The configuration file (`lext.toml`) supports the following options:
//!
//! ```toml
//! verbose = false
//!
//! [report]
//! style = "pair"        # pair | extended
//! format = "text"       # text | json
//! fail_on_errors = false
//! ```

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::{OutputFormat, StyleChoice};
use crate::error::{LextError, Result};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "lext.toml";

/// Main configuration structure for the lext CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Enable debug logging
    #[serde(default)]
    pub verbose: bool,

    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Token line style
    #[serde(default)]
    pub style: StyleChoice,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Exit with an error when the source has lexical errors
    #[serde(default)]
    pub fail_on_errors: bool,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory (`./lext.toml`)
    /// 2. User config directory (`~/.config/lext/lext.toml`)
    /// 3. Platform config directory
    ///
    /// Falls back to the defaults when no file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns [`LextError::Config`] if the file is missing or is not valid
    /// configuration TOML.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LextError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            LextError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        Ok(config)
    }

    /// Save configuration to a file path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            LextError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("lext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
