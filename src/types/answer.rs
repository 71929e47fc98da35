//! Canonical answer records produced by the response normalizer.

use serde::{Deserialize, Serialize};

/// One source citation attached to an answer.
///
/// Taken verbatim from the backend; fields default individually so a
/// partially-shaped citation never fails the whole answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub chapter: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub chunk_id: i64,
}

/// The normalized, UI-ready representation of a successful response,
/// independent of the backend's raw payload shape.
///
/// Invariant: `answer_text` is always displayable text, never a generic
/// object placeholder (stringification may legitimately fall back to
/// pretty-printed JSON text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalAnswer {
    pub answer_text: String,
    pub sources: Vec<Source>,
    /// Provenance: `"greeting"`, `"acknowledgment"`, or a backend-reported
    /// mode string such as `"full_textbook"` or `"selected_text"`.
    pub mode: String,
    pub confidence: String,
}

impl CanonicalAnswer {
    /// A canned answer for a conversational turn that never reaches the
    /// network (greeting or acknowledgment).
    pub fn canned(text: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            answer_text: text.into(),
            sources: Vec::new(),
            mode: mode.into(),
            confidence: "High".to_string(),
        }
    }
}
