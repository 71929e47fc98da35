//! # Normalization Module
//!
//! Turns whatever the backend sends into stable, displayable records.
//!
//! The backend's payload shape has drifted across versions (plain strings,
//! nested `{text: ...}` objects, renamed answer fields, two incompatible
//! error envelopes). Everything here is written as ordered probes with
//! defensive fallbacks so the caller always receives text, never a raw
//! object.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`stringify`] | Safe stringification of arbitrary JSON values |
//! | [`answer`] | Success-body normalization into [`CanonicalAnswer`] |
//! | [`error`] | Failure-path extraction into [`ErrorRecord`] |
//!
//! [`CanonicalAnswer`]: crate::types::CanonicalAnswer
//! [`ErrorRecord`]: crate::types::ErrorRecord

pub mod answer;
pub mod error;
pub mod stringify;

pub use answer::normalize_answer;
pub use error::{extract_error, transport_failure};
pub use stringify::stringify;
