//! Tests for success-body normalization across observed payload shapes.

use docqa_client::normalize::{normalize_answer, stringify};
use serde_json::json;

#[test]
fn string_answer_passes_through_unchanged() {
    let body = json!({
        "answer": "ROS 2 nodes communicate over topics.",
        "sources": [],
        "mode": "full_textbook",
        "confidence": "high"
    });

    let answer = normalize_answer(&body);
    assert_eq!(answer.answer_text, "ROS 2 nodes communicate over topics.");
    assert_eq!(answer.mode, "full_textbook");
    assert_eq!(answer.confidence, "high");
}

#[test]
fn wrapped_answer_object_unwraps() {
    let body = json!({"answer": {"text": "X"}});
    assert_eq!(normalize_answer(&body).answer_text, "X");
}

#[test]
fn unprobed_answer_object_renders_as_pretty_json() {
    let inner = json!({"tokens_used": 512, "finish_reason": "stop"});
    let body = json!({ "answer": inner });

    let expected = serde_json::to_string_pretty(&inner).unwrap();
    assert_eq!(normalize_answer(&body).answer_text, expected);
}

#[test]
fn renamed_answer_fields_probe_in_order() {
    // older backend versions shipped these variants
    let cases = vec![
        (json!({"response": "from response"}), "from response"),
        (json!({"data": {"answer": "from data.answer"}}), "from data.answer"),
        (json!({"result": "from result"}), "from result"),
    ];
    for (body, expected) in cases {
        assert_eq!(normalize_answer(&body).answer_text, expected, "body: {body}");
    }
}

#[test]
fn no_recognized_field_substitutes_fixed_text() {
    let body = json!({"unrelated": true});
    assert_eq!(
        normalize_answer(&body).answer_text,
        "No answer returned from backend"
    );
}

#[test]
fn sources_survive_partial_shapes() {
    let body = json!({
        "answer": "a",
        "sources": [
            {"module": "Module 1", "chapter": "Ch 2", "section": "Nodes", "chunk_id": 41},
            {"module": "Module 3", "chunk_id": 7},
            "garbage entry"
        ]
    });

    let sources = normalize_answer(&body).sources;
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].section, "Nodes");
    assert_eq!(sources[1].chapter, "");
}

#[test]
fn stringify_is_stable_after_one_pass() {
    let shapes = vec![
        json!("already a string"),
        json!({"text": "wrapped"}),
        json!({"message": {"content": "double wrapped"}}),
        json!(12.25),
        json!({"opaque": [1, 2, 3]}),
    ];

    for shape in shapes {
        let once = stringify(&shape);
        let twice = stringify(&serde_json::Value::String(once.clone()));
        assert_eq!(once, twice, "shape: {shape}");
    }
}
