//! Runtime configuration
//!
//! Loaded once at startup from environment variables, with explicit errors
//! for values that are present but unusable.
//!
//! - `CODEBREAKER_DATA_DIR`: where saved games and stats live (default `.codebreaker`)
//! - `CODEBREAKER_SHOW_MISPLACED`: include misplaced counts on Insane (default `true`)
//! - `CODEBREAKER_BASE_URL`: prefix for share links (default `http://localhost:3000`)

use std::env;
use std::path::PathBuf;

const DATA_DIR_VAR: &str = "CODEBREAKER_DATA_DIR";
const SHOW_MISPLACED_VAR: &str = "CODEBREAKER_SHOW_MISPLACED";
const BASE_URL_VAR: &str = "CODEBREAKER_BASE_URL";

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => {
                write!(f, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub show_misplaced: bool,
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".codebreaker"),
            show_misplaced: true,
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be
    /// parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|value| !value.trim().is_empty())
            .map_or(defaults.data_dir, PathBuf::from);

        let show_misplaced = match lookup(SHOW_MISPLACED_VAR) {
            Some(value) => parse_bool(SHOW_MISPLACED_VAR, &value)?,
            None => defaults.show_misplaced,
        };

        let base_url = match lookup(BASE_URL_VAR) {
            Some(value) if value.starts_with("http://") || value.starts_with("https://") => {
                value.trim_end_matches('/').to_string()
            }
            Some(value) => {
                return Err(ConfigError::InvalidValue {
                    key: BASE_URL_VAR.to_string(),
                    message: format!("'{value}' is not an http(s) URL"),
                });
            }
            None => defaults.base_url,
        };

        Ok(Self {
            data_dir,
            show_misplaced,
            base_url,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got '{other}'"),
        }),
    }
}
