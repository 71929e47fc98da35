//! Tests for error-envelope disambiguation.

use docqa_client::normalize::{extract_error, transport_failure};
use docqa_client::ErrorKind;
use serde_json::json;

#[test]
fn transport_path_is_fixed_and_non_empty() {
    let record = transport_failure();
    assert_eq!(record.kind, ErrorKind::Network);
    assert!(!record.message.is_empty());
    // the record renders directly
    assert_eq!(record.to_string(), record.message);
}

#[test]
fn nested_envelope_yields_inner_message() {
    let body = json!({"detail": {"error": {"message": "rate limited"}}});
    let record = extract_error(429, &body.to_string());
    assert_eq!(record.message, "rate limited");
    assert_eq!(record.kind, ErrorKind::Backend { status: 429 });
}

#[test]
fn nested_envelope_falls_back_to_code() {
    let body = json!({"detail": {"error": {"code": "GENERATION_ERROR"}}});
    let record = extract_error(500, &body.to_string());
    assert_eq!(record.message, "GENERATION_ERROR");
}

#[test]
fn flat_error_envelope_is_probed_the_same_way() {
    let body = json!({"error": {"code": "EMBEDDING_ERROR", "message": "embedding backend down"}});
    let record = extract_error(500, &body.to_string());
    assert_eq!(record.message, "embedding backend down");
}

#[test]
fn string_detail_is_used_verbatim() {
    let record = extract_error(404, r#"{"detail": "not found"}"#);
    assert_eq!(record.message, "not found");
    assert_eq!(record.kind, ErrorKind::Backend { status: 404 });
}

#[test]
fn message_field_is_the_last_string_probe() {
    let record = extract_error(503, r#"{"message": "service warming up"}"#);
    assert_eq!(record.message, "service warming up");
}

#[test]
fn unmatched_body_renders_as_pretty_json_text() {
    let record = extract_error(500, r#"{"trace_id": "abc123"}"#);
    // still a string, never a raw object
    assert!(record.message.contains("trace_id"));
    assert!(record.message.contains("abc123"));
}

#[test]
fn fastapi_validation_array_detail_degrades_to_json_text() {
    // FastAPI ships {"detail": [ ... ]} for validation failures; no probe
    // matches, so the whole body renders as text.
    let body = json!({"detail": [{"loc": ["body", "question"], "msg": "too short"}]});
    let record = extract_error(422, &body.to_string());
    assert!(record.message.contains("too short"));
    assert_eq!(record.kind, ErrorKind::Backend { status: 422 });
}

#[test]
fn non_json_bodies_are_malformed_and_carry_the_status() {
    for (status, body) in [(502u16, "<html>Bad Gateway</html>"), (500, ""), (504, "timeout")] {
        let record = extract_error(status, body);
        assert_eq!(record.kind, ErrorKind::MalformedResponse, "body: {body:?}");
        assert!(
            record.message.contains(&status.to_string()),
            "message should include status {status}"
        );
    }
}
