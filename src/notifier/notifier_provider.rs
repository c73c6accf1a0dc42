//! Provisioning notifier implementation.
//!
//! Announces a configuration block to an external endpoint with a single
//! JSON POST when the block is provisioned. Uses the shared `HTTP_CLIENT`
//! for connection pooling.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use super::error::{ProvisionError, ProvisionResult};
use super::payload::ProvisionPayload;
use super::provider::{Provisioner, Unmarshaler};
use crate::config::placeholder::Replacer;
use crate::config::{ConfigError, ConfigSource, NotifierSettings, parse_block};
use crate::external::HTTP_CLIENT;

/// Notifier provider
///
/// Holds the raw endpoint settings until provisioning. Provisioning
/// resolves placeholders in all three fields in place, then sends the
/// request; the settings are not expected to change afterwards.
#[derive(Debug, Clone)]
pub struct NotifierProvider {
    settings: NotifierSettings,
}

impl NotifierProvider {
    /// Creates a provider from already-loaded settings
    pub fn new(settings: NotifierSettings) -> Self {
        Self { settings }
    }

    /// Creates a provider from a directive text block
    pub fn from_block(input: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(parse_block(input)?))
    }

    /// Current settings (raw before provisioning, resolved after)
    pub fn settings(&self) -> &NotifierSettings {
        &self.settings
    }

    /// Sends the provisioning request with the provider's details.
    ///
    /// Builds the `{username, password, timestamp}` payload, POSTs it as
    /// JSON, and succeeds only on an exact 200 response. The response body
    /// is discarded, but always read first so the connection is drained
    /// and returned to the pool on every path.
    ///
    /// # Errors
    /// * [`ProvisionError::Serialization`] when the payload fails to encode
    /// * [`ProvisionError::Transport`] on network-level failure
    /// * [`ProvisionError::UnexpectedStatus`] for any non-200 status,
    ///   carrying the status text
    pub async fn send_request(&self) -> ProvisionResult<()> {
        let payload = ProvisionPayload::new(&self.settings.username, &self.settings.password);
        let body = serde_json::to_string(&payload).map_err(ProvisionError::Serialization)?;

        debug!(url = %self.settings.url, "sending provisioning request");

        let response = HTTP_CLIENT
            .post(&self.settings.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|source| ProvisionError::Transport {
                url: self.settings.url.clone(),
                source,
            })?;

        let status = response.status();
        // drain the discarded body so the connection is released
        let _ = response.bytes().await;

        if status != StatusCode::OK {
            return Err(ProvisionError::UnexpectedStatus {
                status: status.to_string(),
            });
        }

        info!(url = %self.settings.url, "provisioning request acknowledged");
        Ok(())
    }
}

#[async_trait]
impl Provisioner for NotifierProvider {
    /// Resolves placeholders in url, username, and password, then sends
    /// the provisioning request. A single attempt, no retries.
    async fn provision(&mut self, replacer: &Replacer) -> ProvisionResult<()> {
        self.settings.url = replacer.replace_all(&self.settings.url);
        self.settings.username = replacer.replace_all(&self.settings.username);
        self.settings.password = replacer.replace_all(&self.settings.password);

        self.settings.warn_if_incomplete();

        self.send_request().await
    }

    fn name(&self) -> &'static str {
        "notifier"
    }
}

impl Unmarshaler for NotifierProvider {
    fn load(source: &ConfigSource) -> Result<Self, ConfigError> {
        Ok(Self::new(NotifierSettings::load(source)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_block() {
        let provider = NotifierProvider::from_block(
            "notifier {\n url https://x\n username u\n password p\n}",
        )
        .unwrap();
        assert_eq!(provider.settings().url, "https://x");
        assert_eq!(provider.settings().username, "u");
        assert_eq!(provider.settings().password, "p");
    }

    #[test]
    fn test_from_block_propagates_parse_errors() {
        let err = NotifierProvider::from_block("notifier { url }").unwrap_err();
        assert!(matches!(err, ConfigError::MissingArgument { .. }));
    }

    #[test]
    fn test_load_structured_source() {
        let source = ConfigSource::Structured(json!({
            "url": "https://x",
            "username": "u",
            "password": "p",
        }));
        let provider = NotifierProvider::load(&source).unwrap();
        assert_eq!(provider.settings().username, "u");
    }

    #[test]
    fn test_load_block_source() {
        let source = ConfigSource::Block("notifier { username u }".to_string());
        let provider = NotifierProvider::load(&source).unwrap();
        assert_eq!(provider.settings().username, "u");
    }

    #[test]
    fn test_provider_name() {
        let provider = NotifierProvider::new(NotifierSettings::default());
        assert_eq!(provider.name(), "notifier");
    }
}
