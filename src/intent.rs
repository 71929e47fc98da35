//! Conversational intent pre-filter.
//!
//! Trivial conversational turns (greetings, thanks) are answered locally
//! without a network call. The token lists are configuration data, not
//! control flow: swap in a localized vocabulary through the builder without
//! touching the state machine.

use once_cell::sync::Lazy;

/// Classification of a trimmed user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Thanks,
    /// Anything that should reach the backend.
    Question,
}

static DEFAULT_GREETING_TOKENS: Lazy<Vec<String>> =
    Lazy::new(|| ["hello", "hi", "hey"].iter().map(|s| s.to_string()).collect());

static DEFAULT_THANKS_TOKENS: Lazy<Vec<String>> = Lazy::new(|| {
    ["thanks", "thank you", "thx"]
        .iter()
        .map(|s| s.to_string())
        .collect()
});

/// Default greeting vocabulary.
pub fn default_greeting_tokens() -> Vec<String> {
    DEFAULT_GREETING_TOKENS.clone()
}

/// Default gratitude vocabulary.
pub fn default_thanks_tokens() -> Vec<String> {
    DEFAULT_THANKS_TOKENS.clone()
}

/// Keyword-based intent classifier.
///
/// Matching is case-insensitive; tokens are compiled to lower case once at
/// construction.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    greeting_tokens: Vec<String>,
    thanks_tokens: Vec<String>,
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self::with_token_sets(DEFAULT_GREETING_TOKENS.clone(), DEFAULT_THANKS_TOKENS.clone())
    }

    /// Build a classifier over custom token sets.
    pub fn with_token_sets(greeting_tokens: Vec<String>, thanks_tokens: Vec<String>) -> Self {
        Self {
            greeting_tokens: compile(greeting_tokens),
            thanks_tokens: compile(thanks_tokens),
        }
    }

    /// Classify input as Greeting, Thanks, or Question.
    ///
    /// Greeting matches exactly or as a "token + space" prefix ("hi there"
    /// matches, "hiker" does not). Thanks matches as a substring anywhere,
    /// since gratitude phrases are typically embedded ("thanks a lot").
    /// Greeting is tested first and wins when both could match.
    pub fn classify(&self, text: &str) -> Intent {
        let normalized = text.trim().to_lowercase();

        for token in &self.greeting_tokens {
            if normalized == *token || normalized.starts_with(&format!("{token} ")) {
                return Intent::Greeting;
            }
        }

        for token in &self.thanks_tokens {
            if normalized.contains(token.as_str()) {
                return Intent::Thanks;
            }
        }

        Intent::Question
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
