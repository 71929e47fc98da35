//! Builder for creating clients with custom configuration.
//!
//! Keep this surface area small and predictable.

use std::time::Duration;

use crate::client::config::ClientConfig;
use crate::client::core::QaClient;
use crate::intent::IntentClassifier;
use crate::Result;

pub struct QaClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    greeting_tokens: Option<Vec<String>>,
    thanks_tokens: Option<Vec<String>>,
}

impl QaClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            greeting_tokens: None,
            thanks_tokens: None,
        }
    }

    /// Set the backend base URL (including any version prefix). Also the
    /// injection point for mock servers in tests.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the transport timeout (default 30s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the greeting token set (e.g. with a localized vocabulary).
    pub fn greeting_tokens(mut self, tokens: Vec<String>) -> Self {
        self.greeting_tokens = Some(tokens);
        self
    }

    /// Replace the thanks token set.
    pub fn thanks_tokens(mut self, tokens: Vec<String>) -> Self {
        self.thanks_tokens = Some(tokens);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<QaClient> {
        let base_url = self.base_url.ok_or_else(|| crate::Error::Configuration {
            message: "base_url is required".to_string(),
        })?;

        let mut config = ClientConfig::new(base_url);
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }

        let intent = IntentClassifier::with_token_sets(
            self.greeting_tokens
                .unwrap_or_else(crate::intent::default_greeting_tokens),
            self.thanks_tokens
                .unwrap_or_else(crate::intent::default_thanks_tokens),
        );

        QaClient::with_parts(config, intent)
    }
}

impl Default for QaClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
