//! Configuration loader for beacon-rs
//!
//! This module provides the `ConfigLoader` struct that loads the binary's
//! settings from an optional TOML file with environment variable overrides
//! layered on top.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable naming a settings file to load
pub const CONFIG_FILE_ENV: &str = "BEACON_CONFIG_FILE";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "BEACON";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Loads [`Settings`] from a TOML file and the environment.
///
/// Sources in order of priority:
/// 1. the TOML file, when one is given (CLI flag or `BEACON_CONFIG_FILE`)
/// 2. `BEACON_*` environment variables (highest priority)
///
/// With no file at all, the loader yields defaults plus env overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Settings file path, if any
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader, picking up `BEACON_CONFIG_FILE` when set
    pub fn new() -> Self {
        Self {
            config_file: std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from),
        }
    }

    /// Create a loader for a specific settings file
    pub fn with_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            config_file: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Load and deserialize settings from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if the named file does not exist, or if any source
    /// fails to parse or deserialize.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let mut builder = Config::builder();

        if let Some(ref path) = self.config_file {
            builder = Self::add_file_source(builder, path)?;
        }

        // Environment variables are always layered last:
        // BEACON_NOTIFIER__URL -> notifier.url
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true),
        );

        let config = builder.build()?;
        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| ConfigError::parse(format!("failed to deserialize settings: {}", e)))?;

        Ok(settings)
    }

    fn add_file_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: &Path,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::file_not_found(path.display().to_string()));
        }
        Ok(builder
            .add_source(File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(true)))
    }
}
