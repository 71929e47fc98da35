//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Explicit configuration handed to the controller at construction.
///
/// The endpoint is a value, not an ambient constant, so the core stays
/// testable in isolation from network and environment concerns.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, including any version prefix
    /// (e.g. `https://example.com/api/v1`).
    pub base_url: String,
    /// Transport timeout governing worst-case latency. The lifecycle layer
    /// imposes no timeout of its own.
    pub timeout: Duration,
}

impl ClientConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Validate the configured base URL.
    pub(crate) fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.base_url).map_err(|e| Error::Configuration {
            message: format!("invalid base_url '{}': {}", self.base_url, e),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Configuration {
                message: format!("unsupported base_url scheme '{}'", parsed.scheme()),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(ClientConfig::new("https://example.com/api/v1").validate().is_ok());
        assert!(ClientConfig::new("http://localhost:8000").validate().is_ok());
    }

    #[test]
    fn rejects_garbage_and_odd_schemes() {
        assert!(ClientConfig::new("not a url").validate().is_err());
        assert!(ClientConfig::new("ftp://example.com").validate().is_err());
    }
}
