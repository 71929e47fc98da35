//! Request lifecycle state and error records.

use crate::types::CanonicalAnswer;
use serde::{Deserialize, Serialize};

/// Classification of a request-path failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Empty input, handled locally; no network call was made.
    Validation,
    /// Transport-level failure; the request never completed.
    Network,
    /// Non-JSON or unparseable body on the failure path.
    MalformedResponse,
    /// Structured error envelope from the peer, carries the HTTP status.
    Backend { status: u16 },
}

/// A single human-readable error surfaced to the embedding application.
///
/// Invariant: `message` is always displayable text, never a raw object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub message: String,
    pub kind: ErrorKind,
}

impl ErrorRecord {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

impl std::fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Lifecycle state of the current submission.
///
/// Exactly one is active at a time; owned exclusively by the controller and
/// observed read-only (as a snapshot) by the embedding application.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Submitting,
    Succeeded(CanonicalAnswer),
    Failed(ErrorRecord),
}

impl RequestState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, RequestState::Submitting)
    }
}
