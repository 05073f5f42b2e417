//! Logger configuration.
//!
//! # Data Flow
//! ```text
//! TOML file / string  ─┐
//!                      ├→ LoggerConfig → validate() → Logger::from_config
//! LOGLIGHT_* env vars ─┘   (env overrides file values)
//! ```

mod env;
mod validation;

use crate::filter::FilterMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use env::{load_env_string, load_env_string_opt, load_env_var, load_env_var_opt};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Environment error: {0}")]
    EnvError(String),
}

/// Output layout selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    #[default]
    Json,
    Plain,
}

impl FromStr for FormatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(FormatKind::Json),
            "plain" | "text" => Ok(FormatKind::Plain),
            _ => Err(format!("Invalid format '{s}'. Expected 'json' or 'plain'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub mode: FilterMode,
    pub packages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Emit DEBUG entries
    pub output_debug: bool,
    pub format: FormatKind,
    /// Indent JSON output (ignored by the plain format)
    pub pretty: bool,
    /// Include the level: the whole entry for JSON, a prefix for plain
    pub show_level: bool,
    /// Origin used by the non-macro log methods
    pub origin: String,
    pub filter: Option<FilterConfig>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            output_debug: false,
            format: FormatKind::Json,
            pretty: false,
            show_level: true,
            origin: String::new(),
            filter: None,
        }
    }
}

impl LoggerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Defaults overridden by `LOGLIGHT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        load_env_var("LOGLIGHT_DEBUG", &mut self.output_debug)?;
        load_env_var("LOGLIGHT_FORMAT", &mut self.format)?;
        load_env_var("LOGLIGHT_PRETTY", &mut self.pretty)?;
        load_env_var("LOGLIGHT_SHOW_LEVEL", &mut self.show_level)?;
        load_env_string("LOGLIGHT_ORIGIN", &mut self.origin);

        let mut mode: Option<FilterMode> = None;
        let mut packages: Option<String> = None;
        load_env_var_opt("LOGLIGHT_FILTER_MODE", &mut mode)?;
        load_env_string_opt("LOGLIGHT_FILTER_PACKAGES", &mut packages);

        if mode.is_some() || packages.is_some() {
            let filter = self.filter.get_or_insert_with(|| FilterConfig {
                mode: FilterMode::default(),
                packages: Vec::new(),
            });
            if let Some(mode) = mode {
                filter.mode = mode;
            }
            if let Some(packages) = packages {
                filter.packages = packages
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect();
            }
        }

        Ok(())
    }
}
