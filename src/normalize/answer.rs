//! Success-body normalization.

use crate::types::{CanonicalAnswer, Source};
use crate::utils::json_probe;
use serde_json::Value;

use super::stringify::stringify;

/// Answer fields probed in order; the backend has shipped all of these at
/// one point or another.
const ANSWER_FIELD_PATHS: [&str; 4] = ["answer", "response", "data.answer", "result"];

/// Substituted when no recognized answer field is present at all.
const NO_ANSWER_FALLBACK: &str = "No answer returned from backend";

/// Normalize a success response body into a [`CanonicalAnswer`].
///
/// Never fails: missing or malformed fields degrade to defaults rather than
/// erroring, so a 2xx response always renders.
pub fn normalize_answer(body: &Value) -> CanonicalAnswer {
    let answer_text = match json_probe::first_present(body, &ANSWER_FIELD_PATHS) {
        Some(field) => stringify(field),
        None => NO_ANSWER_FALLBACK.to_string(),
    };

    CanonicalAnswer {
        answer_text,
        sources: decode_sources(body.get("sources")),
        mode: stringify(body.get("mode").unwrap_or(&Value::Null)),
        confidence: stringify(body.get("confidence").unwrap_or(&Value::Null)),
    }
}

/// Decode `sources` defensively: anything that is not an array yields an
/// empty list, and elements that do not decode are dropped individually.
fn decode_sources(raw: Option<&Value>) -> Vec<Source> {
    match raw {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| serde_json::from_value::<Source>(item.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}
