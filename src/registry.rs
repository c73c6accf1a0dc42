//! Explicit provider registry.
//!
//! The composition root constructs providers and registers them here
//! directly; providers never register themselves through a process-global
//! table. Registration order is preserved and is the provisioning order.

use tracing::{error, info};

use crate::config::placeholder::Replacer;
use crate::notifier::{ProvisionResult, Provisioner};

/// Registry of named providers awaiting provisioning
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<(String, Box<dyn Provisioner>)>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under `name`. Names are informational (used for
    /// logging); duplicates are allowed and provisioned independently.
    pub fn register<S: Into<String>>(&mut self, name: S, provider: Box<dyn Provisioner>) -> &mut Self {
        self.providers.push((name.into(), provider));
        self
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Provision every registered provider in registration order.
    ///
    /// Stops at the first failure and returns it; providers after the
    /// failing one are not attempted. Nothing is retried or swallowed.
    pub async fn provision_all(&mut self, replacer: &Replacer) -> ProvisionResult<()> {
        for (name, provider) in &mut self.providers {
            info!(provider = %name, "provisioning");
            if let Err(e) = provider.provision(replacer).await {
                error!(provider = %name, error = %e, "provisioning failed");
                return Err(e);
            }
        }
        Ok(())
    }
}
