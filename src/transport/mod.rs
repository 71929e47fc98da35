//! HTTP transport to the Q&A backend.
//!
//! Thin wrapper around `reqwest` owning the connection pool, timeout, and
//! base URL. The transport reports the raw status and body text; shaping the
//! payload into answer or error records is the normalizer's job.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

/// Transport-level failure: the request never produced an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

/// A raw HTTP exchange result, before any normalization.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport over a validated base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(8)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST a JSON body and read back whatever arrived, success or not.
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = url.as_str(), "dispatching POST");

        // .json() also sets the application/json content type
        let resp = self.client.post(&url).json(body).send().await?;

        let status = resp.status().as_u16();
        // Body read failures after a completed exchange degrade to an empty
        // body; the extractor classifies that as malformed.
        let body = resp.text().await.unwrap_or_default();

        Ok(RawResponse { status, body })
    }

    /// GET a path and read back the raw exchange.
    pub async fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = url.as_str(), "dispatching GET");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();

        Ok(RawResponse { status, body })
    }
}
