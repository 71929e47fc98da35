//! # Types Module
//!
//! Core data model for the client: the question being asked, the canonical
//! answer the normalizer produces, the error record the extractor produces,
//! and the request lifecycle state observed by the embedding application.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Question`] | Validated, trimmed user input |
//! | [`CanonicalAnswer`] | UI-ready answer, independent of raw payload shape |
//! | [`Source`] | One backend citation (module/chapter/section/chunk) |
//! | [`ErrorRecord`] | Human-readable error message plus kind |
//! | [`RequestState`] | Lifecycle state owned by the controller |

pub mod answer;
pub mod state;

pub use answer::{CanonicalAnswer, Source};
pub use state::{ErrorKind, ErrorRecord, RequestState};

/// A validated question: trimmed, guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// Trim the input and reject empty or whitespace-only text.
    pub fn new(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
