//! # docqa-client
//!
//! A robust client adapter for conversational documentation Q&A backends.
//!
//! ## Overview
//!
//! The remote service this crate talks to has no fixed response contract
//! across versions: answer text arrives as a plain string, a nested object,
//! or under a renamed field, and errors come wrapped in at least two
//! incompatible envelopes. This library renders a stable answer regardless,
//! by decoding into generic JSON and applying ordered field probes with
//! defensive fallbacks.
//!
//! ## Key Features
//!
//! - **Canonical answers**: [`CanonicalAnswer`] is shape-independent and
//!   always displayable; sources, mode, and confidence degrade gracefully
//! - **Error disambiguation**: one [`ErrorRecord`] per failure, extracted
//!   across transport failures, malformed bodies, and envelope variants
//! - **Intent pre-filter**: greetings and thanks are answered locally with
//!   canned responses, no network call
//! - **Single-flight lifecycle**: [`QaClient`] owns a `Idle / Submitting /
//!   Succeeded / Failed` state machine and discards superseded in-flight
//!   completions (last-submission-wins)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docqa_client::QaClientBuilder;
//!
//! #[tokio::main]
//! async fn main() -> docqa_client::Result<()> {
//!     let client = QaClientBuilder::new()
//!         .base_url("https://example.com/api/v1")
//!         .build()?;
//!
//!     match client.submit("What is a ROS 2 node?").await {
//!         Ok(answer) => println!("{} ({})", answer.answer_text, answer.confidence),
//!         Err(record) => eprintln!("{record}"),
//!     }
//!
//!     assert!(!client.state().is_submitting());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Lifecycle controller, builder, configuration |
//! | [`intent`] | Greeting/thanks/question pre-filter |
//! | [`normalize`] | Safe stringifier, response normalizer, error extractor |
//! | [`transport`] | HTTP transport (reqwest) |
//! | [`types`] | Core data model |
//! | [`utils`] | JSON dot-path probing |

pub mod client;
pub mod error;
pub mod intent;
pub mod normalize;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use client::{ClientConfig, QaClient, QaClientBuilder};
pub use error::Error;
pub use intent::{Intent, IntentClassifier};
pub use types::{CanonicalAnswer, ErrorKind, ErrorRecord, RequestState, Source};

/// Result type alias for the library's construction paths.
pub type Result<T> = std::result::Result<T, Error>;
