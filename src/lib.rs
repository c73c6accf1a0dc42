//! Beacon-RS Library
//!
//! Core library modules for the beacon-rs provisioning notifier.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod external;
pub mod logger;
pub mod notifier;
pub mod registry;

pub use notifier::{NotifierProvider, Provisioner, Unmarshaler};
pub use registry::ProviderRegistry;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
