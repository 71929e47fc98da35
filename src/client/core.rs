//! The request lifecycle controller.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;

use crate::client::config::ClientConfig;
use crate::intent::{Intent, IntentClassifier};
use crate::normalize::{extract_error, normalize_answer, transport_failure};
use crate::types::{CanonicalAnswer, ErrorKind, ErrorRecord, Question, RequestState};
use crate::transport::HttpTransport;
use crate::Result;

const QUESTION_PATH: &str = "/question";
const SELECTED_TEXT_PATH: &str = "/question/selected-text";
const HEALTH_PATH: &str = "/health";

const GREETING_REPLY: &str =
    "Hello! Ask me anything about the documentation and I'll answer from its contents.";
const THANKS_REPLY: &str = "You're welcome! Feel free to ask another question.";

const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question";
const EMPTY_SELECTION_MESSAGE: &str = "Please select a passage to ask about";

/// Client adapter for a conversational documentation Q&A backend.
///
/// Owns the single [`RequestState`] and enforces single-flight semantics:
/// the embedding application is expected to disable submission while
/// `Submitting`, and the controller additionally tags every dispatch with a
/// sequence number so a superseded in-flight response can never overwrite a
/// newer result (last-submission-wins).
pub struct QaClient {
    transport: HttpTransport,
    intent: IntentClassifier,
    state: Mutex<RequestState>,
    /// Sequence of the latest dispatch; completions for older sequences are
    /// discarded.
    latest_seq: AtomicU64,
}

/// Tag for one dispatched request.
#[derive(Debug, Clone, Copy)]
struct DispatchTicket {
    seq: u64,
}

impl QaClient {
    /// Convenience constructor over just a base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        crate::client::builder::QaClientBuilder::new()
            .base_url(base_url)
            .build()
    }

    pub(crate) fn with_parts(config: ClientConfig, intent: IntentClassifier) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config.base_url, config.timeout)?;

        Ok(Self {
            transport,
            intent,
            state: Mutex::new(RequestState::Idle),
            latest_seq: AtomicU64::new(0),
        })
    }

    /// Snapshot of the current lifecycle state.
    pub fn state(&self) -> RequestState {
        self.lock_state().clone()
    }

    /// Discard the prior result: `Succeeded | Failed -> Idle`.
    ///
    /// A no-op while `Submitting` (there is no cancellation) or when already
    /// `Idle`.
    pub fn clear(&self) {
        let mut state = self.lock_state();
        if matches!(*state, RequestState::Succeeded(_) | RequestState::Failed(_)) {
            *state = RequestState::Idle;
        }
    }

    /// Submit a free-text turn.
    ///
    /// Greetings and thanks are answered locally without a network call;
    /// anything else is forwarded to the backend. Empty or whitespace-only
    /// input reports a validation error and leaves the state untouched.
    ///
    /// The returned value is this submission's own outcome; the shared state
    /// only reflects it if no newer submission has started in the meantime.
    pub async fn submit(&self, input: &str) -> std::result::Result<CanonicalAnswer, ErrorRecord> {
        let Some(question) = Question::new(input) else {
            return Err(ErrorRecord::new(ErrorKind::Validation, EMPTY_QUESTION_MESSAGE));
        };

        match self.intent.classify(question.as_str()) {
            Intent::Greeting => {
                Ok(self.short_circuit(CanonicalAnswer::canned(GREETING_REPLY, "greeting")))
            }
            Intent::Thanks => {
                Ok(self.short_circuit(CanonicalAnswer::canned(THANKS_REPLY, "acknowledgment")))
            }
            Intent::Question => {
                let body = json!({ "question": question.as_str() });
                self.dispatch(QUESTION_PATH, body).await
            }
        }
    }

    /// Submit a question restricted to a user-selected passage.
    ///
    /// Same normalize/extract path as [`submit`](Self::submit); the backend
    /// reports mode `"selected_text"` and typically no sources.
    pub async fn submit_selected(
        &self,
        input: &str,
        selected_text: &str,
    ) -> std::result::Result<CanonicalAnswer, ErrorRecord> {
        let Some(question) = Question::new(input) else {
            return Err(ErrorRecord::new(ErrorKind::Validation, EMPTY_QUESTION_MESSAGE));
        };
        let selection = selected_text.trim();
        if selection.is_empty() {
            return Err(ErrorRecord::new(ErrorKind::Validation, EMPTY_SELECTION_MESSAGE));
        }

        let body = json!({
            "question": question.as_str(),
            "selected_text": selection,
        });
        self.dispatch(SELECTED_TEXT_PATH, body).await
    }

    /// Probe the backend health endpoint.
    ///
    /// The body shape is not relied upon; it is decoded generically. Does
    /// not touch the lifecycle state.
    pub async fn health(&self) -> std::result::Result<Value, ErrorRecord> {
        let raw = match self.transport.get(HEALTH_PATH).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "health probe failed at transport level");
                return Err(transport_failure());
            }
        };

        if !raw.is_success() {
            return Err(extract_error(raw.status, &raw.body));
        }

        serde_json::from_str(&raw.body).map_err(|_| {
            ErrorRecord::new(
                ErrorKind::MalformedResponse,
                format!("Server returned invalid JSON (status {})", raw.status),
            )
        })
    }

    /// Answer a trivial conversational turn locally: `-> Succeeded(canned)`
    /// without ever entering `Submitting`.
    ///
    /// Bumps the sequence so any older in-flight dispatch is superseded by
    /// the canned result.
    fn short_circuit(&self, answer: CanonicalAnswer) -> CanonicalAnswer {
        self.latest_seq.fetch_add(1, Ordering::SeqCst);
        *self.lock_state() = RequestState::Succeeded(answer.clone());
        answer
    }

    async fn dispatch(
        &self,
        path: &str,
        body: Value,
    ) -> std::result::Result<CanonicalAnswer, ErrorRecord> {
        let ticket = self.begin_dispatch();
        let request_id = Uuid::new_v4();
        let start = Instant::now();

        let outcome = match self.transport.post_json(path, &body).await {
            Err(e) => {
                warn!(
                    request_id = %request_id,
                    endpoint = path,
                    error = %e,
                    "request failed at transport level"
                );
                Err(transport_failure())
            }
            Ok(raw) if raw.is_success() => match serde_json::from_str::<Value>(&raw.body) {
                Ok(decoded) => Ok(normalize_answer(&decoded)),
                Err(_) => Err(ErrorRecord::new(
                    ErrorKind::MalformedResponse,
                    format!("Server returned invalid JSON (status {})", raw.status),
                )),
            },
            Ok(raw) => Err(extract_error(raw.status, &raw.body)),
        };

        let committed = self.commit(ticket, &outcome);
        info!(
            request_id = %request_id,
            endpoint = path,
            duration_ms = start.elapsed().as_millis() as u64,
            ok = outcome.is_ok(),
            committed,
            "request completed"
        );

        outcome
    }

    /// Transition to `Submitting` and tag the dispatch with the next
    /// sequence number. Called from any state; a resubmission supersedes
    /// whatever was in flight.
    fn begin_dispatch(&self) -> DispatchTicket {
        let seq = self.latest_seq.fetch_add(1, Ordering::SeqCst) + 1;
        *self.lock_state() = RequestState::Submitting;
        DispatchTicket { seq }
    }

    /// Commit a completed dispatch unless it has been superseded.
    fn commit(
        &self,
        ticket: DispatchTicket,
        outcome: &std::result::Result<CanonicalAnswer, ErrorRecord>,
    ) -> bool {
        let mut state = self.lock_state();
        if self.latest_seq.load(Ordering::SeqCst) != ticket.seq {
            warn!(seq = ticket.seq, "discarding superseded completion");
            return false;
        }

        *state = match outcome {
            Ok(answer) => RequestState::Succeeded(answer.clone()),
            Err(record) => RequestState::Failed(record.clone()),
        };
        true
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, RequestState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
