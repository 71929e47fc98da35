//! Crate-level error type for fallible construction paths.
//!
//! Request-path failures never surface here: they terminate in an
//! [`ErrorRecord`](crate::types::ErrorRecord) so the embedding application
//! always has displayable text.

use thiserror::Error;

/// Unified error for client construction and configuration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),
}
