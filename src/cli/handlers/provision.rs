//! Provision command handler
//!
//! Handles the provision command including dry-run validation and the
//! actual dispatch through the provider registry.

use crate::config::NotifierSettings;
use crate::config::placeholder::Replacer;
use crate::notifier::{NotifierProvider, ProvisionResult};
use crate::registry::ProviderRegistry;

/// Handler for the provision command
pub struct ProvisionCommandHandler {
    settings: NotifierSettings,
}

impl ProvisionCommandHandler {
    /// Create a new provision command handler
    pub fn new(settings: NotifierSettings) -> Self {
        Self { settings }
    }

    /// Execute the provision command with optional dry-run support
    ///
    /// # Arguments
    /// * `dry_run` - If true, resolves configuration and exits without
    ///   sending anything
    /// * `replacer` - Placeholder lookup built by the composition root
    pub async fn execute(&self, dry_run: bool, replacer: &Replacer) -> ProvisionResult<()> {
        if dry_run {
            self.validate_only(replacer)
        } else {
            self.provision(replacer).await
        }
    }

    /// Resolve the configuration and report it without sending anything
    fn validate_only(&self, replacer: &Replacer) -> ProvisionResult<()> {
        let url = replacer.replace_all(&self.settings.url);
        let username = replacer.replace_all(&self.settings.username);

        println!("✓ Configuration loaded");
        println!("✓ Request would be sent to: {}", url);
        println!("✓ Username resolves to: {}", username);
        // the password is resolved at send time only, never printed
        println!("Dry run completed successfully - nothing was sent");

        Ok(())
    }

    /// Register the notifier and provision it
    async fn provision(&self, replacer: &Replacer) -> ProvisionResult<()> {
        let mut registry = ProviderRegistry::new();
        registry.register(
            "notifier",
            Box::new(NotifierProvider::new(self.settings.clone())),
        );
        registry.provision_all(replacer).await
    }

    /// Get the settings
    pub fn settings(&self) -> &NotifierSettings {
        &self.settings
    }
}
