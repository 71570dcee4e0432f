//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$ZIGZAG_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/zigzag/config.toml`
//! 3. `~/.zigzag/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use zigzag::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Verify: {}", config.verify());
//! println!("Direction: {}", config.direction());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::Direction;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ZIGZAG_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown config key: {0}")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Resolved configuration.
///
/// Accessors apply defaults for anything the file leaves unset.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values read from the config file
    pub global: GlobalConfig,
    /// Path the values were loaded from, if any
    path: Option<PathBuf>,
}

impl Config {
    /// Keys accepted by [`Config::get`] and [`Config::set`].
    pub const KEYS: [&'static str; 3] = ["verify", "json", "direction"];

    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. A missing file is not an error.
    pub fn load() -> Result<Config, ConfigError> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let parsed = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        });
        let global: GlobalConfig = parsed?;
        global.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(Config {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file in search order.
    fn locate() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("zigzag/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".zigzag/config.toml"))
            .filter(|path| path.exists())
    }

    /// Get the canonical write path.
    ///
    /// `$ZIGZAG_CONFIG` if set, otherwise `~/.zigzag/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".zigzag/config.toml"))
    }

    /// Write config atomically.
    ///
    /// Creates parent directories if needed, writes a temp file in the
    /// same directory, then renames it into place.
    pub fn write(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Get a value as display text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for keys outside [`Config::KEYS`].
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "verify" => Ok(self.verify().to_string()),
            "json" => Ok(self.json().to_string()),
            "direction" => Ok(self.direction().to_string()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// Set a value from display text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for unknown keys and
    /// `ConfigError::InvalidValue` if `value` does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let parse_bool = |value: &str| {
            let invalid = || format!("{key} expects true or false, got '{value}'");
            value
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidValue(invalid()))
        };

        match key {
            "verify" => self.global.verify = Some(parse_bool(value)?),
            "json" => self.global.json = Some(parse_bool(value)?),
            "direction" => {
                let direction = value
                    .parse::<Direction>()
                    .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
                self.global.direction = Some(direction.as_str().to_string());
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Check if the demo verifies the tissue after mutating it.
    ///
    /// Defaults to `true` if not configured.
    pub fn verify(&self) -> bool {
        self.global.verify.unwrap_or(true)
    }

    /// Check if output defaults to JSON.
    ///
    /// Defaults to `false` if not configured.
    pub fn json(&self) -> bool {
        self.global.json.unwrap_or(false)
    }

    /// Direction ranks are printed in.
    ///
    /// Defaults to Positive if not configured.
    pub fn direction(&self) -> Direction {
        self.global
            .direction
            .as_deref()
            .and_then(|d| d.parse().ok())
            .unwrap_or_default()
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
