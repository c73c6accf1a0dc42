//! Configuration settings structures for beacon-rs
//!
//! This module defines the notifier settings and the binary-level settings
//! wrapper that can be loaded from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::config::block::parse_block;
use crate::config::error::ConfigError;
use crate::logger::LoggerConfig;

/// A configuration source for the notifier.
///
/// The notifier accepts either a structured key-value object (anything that
/// deserializes from JSON) or a raw directive text block.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Structured object with `url`, `username`, `password` fields
    Structured(JsonValue),
    /// Directive text block, see [`crate::config::block`]
    Block(String),
}

/// Notifier endpoint settings.
///
/// All three fields are expected to be non-empty for the provisioning
/// request to be meaningful, but emptiness is deliberately not rejected;
/// [`NotifierSettings::warn_if_incomplete`] makes the gap visible at
/// provision time instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NotifierSettings {
    /// Destination endpoint for the provisioning request
    #[serde(default)]
    pub url: String,

    /// Account name sent verbatim in the payload
    #[serde(default)]
    pub username: String,

    /// Secret sent base64-encoded in the payload
    #[serde(default)]
    pub password: String,
}

impl NotifierSettings {
    /// Load settings from either supported configuration source
    pub fn load(source: &ConfigSource) -> Result<Self, ConfigError> {
        match source {
            ConfigSource::Structured(value) => Self::from_json(value),
            ConfigSource::Block(text) => parse_block(text),
        }
    }

    /// Parse a structured JSON object into typed settings
    ///
    /// # Arguments
    /// * `value` - The JSON value holding `url`, `username`, `password`
    ///
    /// # Returns
    /// Result containing the parsed settings or a deserialization error
    pub fn from_json(value: &JsonValue) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Emit a warning for every empty field.
    ///
    /// Empty fields produce a request the receiving endpoint will most
    /// likely reject, but the request is still sent.
    pub fn warn_if_incomplete(&self) {
        for (field, value) in [
            ("url", &self.url),
            ("username", &self.username),
            ("password", &self.password),
        ] {
            if value.is_empty() {
                warn!(field, "notifier setting is empty at provision time");
            }
        }
    }
}

/// Binary-level settings: the notifier block plus ambient concerns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Notifier endpoint configuration
    #[serde(default)]
    pub notifier: NotifierSettings,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerConfig,
}
