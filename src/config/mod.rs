//! Configuration management module for beacon-rs
//!
//! This module covers the two ways the notifier can be configured:
//! - a structured settings object (TOML file / JSON value), with
//!   `BEACON_*` environment variable overrides
//! - a directive text block (`notifier { url ... username ... password ... }`)
//!
//! plus placeholder substitution, which runs over the loaded values once at
//! provisioning time.

pub mod block;
pub mod error;
pub mod loader;
pub mod placeholder;
pub mod settings;

// Re-export public types
pub use block::parse_block;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use placeholder::{Replacer, resolve};
pub use settings::{ConfigSource, NotifierSettings, Settings};
