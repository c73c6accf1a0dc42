//! Provider trait seams.
//!
//! The two roles a provider can play are explicit traits: loading itself
//! from a configuration source, and performing the one-time provisioning
//! side effect. The caller wires concrete types to these seams directly;
//! there is no global registry keyed by string identifiers.

use async_trait::async_trait;

use super::error::ProvisionResult;
use crate::config::placeholder::Replacer;
use crate::config::{ConfigError, ConfigSource};

/// One-time activation of a configured provider.
///
/// Provisioning resolves placeholders in the provider's configuration and
/// immediately performs its side effect. Providers are provisioned at most
/// once in their intended use; the trait takes `&mut self` because
/// resolution finalizes the configuration in place.
#[async_trait]
pub trait Provisioner: Send + Sync {
    /// Resolve placeholders via `replacer` and perform the side effect
    ///
    /// # Arguments
    /// * `replacer` - Caller-built placeholder lookup
    ///
    /// # Returns
    /// Ok(()) when the endpoint acknowledged the request, the first error
    /// otherwise. Nothing is retried.
    async fn provision(&mut self, replacer: &Replacer) -> ProvisionResult<()>;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;
}

/// Construction of a provider from either configuration source
pub trait Unmarshaler: Sized {
    /// Load and validate provider configuration from `source`
    fn load(source: &ConfigSource) -> Result<Self, ConfigError>;
}
