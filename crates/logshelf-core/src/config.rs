//! Configuration file parsing for logshelf
//!
//! Supports multiple configuration file formats:
//! - TOML (.toml)
//! - YAML (.yaml, .yml)
//! - JSON (.json)

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{Error, Result};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    /// Detect format from file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

// Default value functions for serde
fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_DIR)
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Web server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Base URL the log routes are mounted under (must start with `/`)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            base_url: default_base_url(),
        }
    }
}

/// logshelf configuration (logshelf.config.toml/yaml/json)
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Service name, used as the logger name
    #[serde(default = "default_name")]
    pub name: String,
    /// Directory holding one log file per process run
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    /// Log file suffix (without the dot)
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Emit debug-level diagnostics
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            directory: default_directory(),
            suffix: default_suffix(),
            verbose: false,
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Load config from file, automatically detecting format from extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            Error::ConfigError(format!(
                "Unsupported config file extension: {}. Expected .toml, .yaml, .yml, or .json",
                path.display()
            ))
        })?;

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, format)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse config content with specified format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Toml => Ok(toml::from_str(content)?),
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            ConfigFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }

    /// Find and load a config file from `dir`, falling back to defaults if
    /// none of the well-known names is present
    pub fn find_and_load(dir: &Path) -> Result<Self> {
        for name in CONFIG_FILES {
            let path = dir.join(name);
            if path.exists() {
                return Self::load(&path);
            }
        }
        Ok(Self::default())
    }

    /// Validate invariants that serde defaults cannot express
    pub fn validate(&self) -> Result<()> {
        if !self.server.base_url.starts_with('/') || self.server.base_url.len() == 1 {
            return Err(Error::config(format!(
                "base_url must start with '/' and not be the root: {}",
                self.server.base_url
            )));
        }
        if self.server.base_url.ends_with('/') {
            return Err(Error::config(format!(
                "base_url must not end with '/': {}",
                self.server.base_url
            )));
        }
        if self.suffix.is_empty() || self.suffix.contains('/') || self.suffix.contains('.') {
            return Err(Error::config(format!("Invalid log suffix: {:?}", self.suffix)));
        }
        Ok(())
    }
}
