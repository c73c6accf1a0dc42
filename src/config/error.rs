//! Configuration error types

use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A directive in a text block was not followed by its argument
    #[error("missing argument for directive '{directive}' (line {line})")]
    MissingArgument { directive: String, line: usize },

    /// A directive name outside the recognized set
    #[error("unrecognized directive '{directive}' (line {line})")]
    UnrecognizedDirective { directive: String, line: usize },

    /// Malformed text block (unclosed braces, trailing tokens, ...)
    #[error("failed to parse configuration block: {0}")]
    Parse(String),

    /// Configuration file not found
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    /// Mutually exclusive configuration sources were both given
    #[error("mutual exclusivity error: {0}")]
    MutualExclusivity(String),

    /// Structured settings object failed to deserialize
    #[error("invalid settings object: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Generic configuration error from the config crate
    #[error("configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        ConfigError::Parse(message.into())
    }

    /// Create a new file not found error
    pub fn file_not_found<S: Into<String>>(path: S) -> Self {
        ConfigError::FileNotFound(path.into())
    }

    /// Create a new mutual exclusivity error
    pub fn mutual_exclusivity<S: Into<String>>(message: S) -> Self {
        ConfigError::MutualExclusivity(message.into())
    }
}
