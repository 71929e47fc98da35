//! Failure-path extraction.
//!
//! The backend has been observed to wrap errors in at least two incompatible
//! envelopes: a nested `{"detail": {"error": {...}}}` shape and a flatter
//! `error`/`detail`/`message` shape. The extractor degrades gracefully
//! across all of them and never surfaces a non-string to the caller.

use crate::types::{ErrorKind, ErrorRecord};
use crate::utils::json_probe;
use serde_json::Value;

use super::stringify::pretty_json;

/// Fixed message for transport-level failures (the request never completed).
const NETWORK_FAILURE_MESSAGE: &str =
    "Unable to connect to the backend. Please try again later.";

/// ErrorRecord for a transport failure.
pub fn transport_failure() -> ErrorRecord {
    ErrorRecord::new(ErrorKind::Network, NETWORK_FAILURE_MESSAGE)
}

/// Extract a single human-readable error from a non-2xx HTTP response.
pub fn extract_error(status: u16, raw_body: &str) -> ErrorRecord {
    let body: Value = match serde_json::from_str(raw_body) {
        Ok(v) => v,
        Err(_) => {
            return ErrorRecord::new(
                ErrorKind::MalformedResponse,
                format!("Server returned invalid JSON (status {status})"),
            );
        }
    };

    ErrorRecord::new(ErrorKind::Backend { status }, envelope_message(&body))
}

/// Probe precedence over the decoded error body, first match wins:
/// 1. `detail.error` object -> message, code, or pretty JSON of it
/// 2. `error` object -> message, code, or pretty JSON of it
/// 3. `detail` non-empty string
/// 4. `message` non-empty string
/// 5. pretty JSON of the whole body
fn envelope_message(body: &Value) -> String {
    if let Some(inner) = body.get("detail").and_then(|d| d.get("error")) {
        if inner.is_object() {
            return error_object_message(inner);
        }
    }

    if let Some(inner) = body.get("error") {
        if inner.is_object() {
            return error_object_message(inner);
        }
    }

    if let Some(detail) = json_probe::non_empty_str(body, "detail") {
        return detail.to_string();
    }

    if let Some(message) = json_probe::non_empty_str(body, "message") {
        return message.to_string();
    }

    pretty_json(body)
}

/// Sub-probe shared by both envelope shapes: `message`, then `code`, then
/// the object itself as pretty JSON.
fn error_object_message(error: &Value) -> String {
    if let Some(message) = json_probe::non_empty_str(error, "message") {
        return message.to_string();
    }
    if let Some(code) = json_probe::non_empty_str(error, "code") {
        return code.to_string();
    }
    pretty_json(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transport_failure_has_fixed_message() {
        let rec = transport_failure();
        assert_eq!(rec.kind, ErrorKind::Network);
        assert!(!rec.message.is_empty());
    }

    #[test]
    fn nested_detail_error_envelope() {
        let body = json!({"detail": {"error": {"message": "rate limited"}}});
        let rec = extract_error(429, &body.to_string());
        assert_eq!(rec.message, "rate limited");
        assert_eq!(rec.kind, ErrorKind::Backend { status: 429 });
    }

    #[test]
    fn flat_error_envelope_prefers_message_then_code() {
        let body = json!({"error": {"code": "VALIDATION_ERROR", "message": "Request validation failed"}});
        let rec = extract_error(400, &body.to_string());
        assert_eq!(rec.message, "Request validation failed");

        let body = json!({"error": {"code": "VALIDATION_ERROR", "message": ""}});
        let rec = extract_error(400, &body.to_string());
        assert_eq!(rec.message, "VALIDATION_ERROR");
    }

    #[test]
    fn error_object_without_message_or_code_renders_as_json() {
        let body = json!({"error": {"status": "down"}});
        let rec = extract_error(500, &body.to_string());
        assert!(rec.message.contains("\"status\""));
    }

    #[test]
    fn string_detail_is_used_directly() {
        let rec = extract_error(404, r#"{"detail": "not found"}"#);
        assert_eq!(rec.message, "not found");
        assert_eq!(rec.kind, ErrorKind::Backend { status: 404 });
    }

    #[test]
    fn top_level_message_is_used() {
        let rec = extract_error(503, r#"{"message": "maintenance window"}"#);
        assert_eq!(rec.message, "maintenance window");
    }

    #[test]
    fn unrecognized_body_renders_whole_payload() {
        let rec = extract_error(500, r#"{"status": "broken"}"#);
        assert!(rec.message.contains("\"status\""));
        assert_eq!(rec.kind, ErrorKind::Backend { status: 500 });
    }

    #[test]
    fn non_json_body_is_malformed_with_status() {
        let rec = extract_error(502, "<html>Bad Gateway</html>");
        assert_eq!(rec.kind, ErrorKind::MalformedResponse);
        assert!(rec.message.contains("502"));
    }

    #[test]
    fn empty_body_is_malformed() {
        let rec = extract_error(500, "");
        assert_eq!(rec.kind, ErrorKind::MalformedResponse);
    }

    #[test]
    fn nested_shape_wins_over_flat_shape() {
        let body = json!({
            "detail": {"error": {"message": "nested wins"}},
            "error": {"message": "flat loses"},
            "message": "plain loses"
        });
        let rec = extract_error(500, &body.to_string());
        assert_eq!(rec.message, "nested wins");
    }
}
