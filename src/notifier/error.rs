//! Provisioning error types

use thiserror::Error;

use crate::config::ConfigError;

/// Result type for provisioning operations
pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// Errors that can occur while provisioning a notifier
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Configuration could not be loaded
    #[error("invalid notifier configuration: {0}")]
    Config(#[from] ConfigError),

    /// Payload failed to encode to JSON. Practically unreachable for a
    /// fixed string-keyed payload, surfaced anyway.
    #[error("failed to serialize provisioning payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Network-level failure building or sending the request
    #[error("failed to send provisioning request to '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a status other than 200
    #[error("received non-200 response: {status}")]
    UnexpectedStatus { status: String },
}
