//! Safe stringification of arbitrary decoded JSON values.

use serde_json::Value;

/// Candidate keys probed, in order, when a display string is wrapped in an
/// object (e.g. `{"text": "..."}` or `{"content": "..."}`).
const TEXT_PROBE_KEYS: [&str; 4] = ["text", "content", "message", "answer"];

/// Recursion bound. JSON has no cycles, but a pathologically nested payload
/// should degrade to JSON text rather than exhaust the stack.
const MAX_DEPTH: usize = 64;

/// Convert an arbitrary decoded JSON value into a display string.
///
/// Rules are evaluated in order, first match wins:
/// 1. a string is returned as-is
/// 2. null becomes the empty string
/// 3. numbers and booleans use their textual representation
/// 4. an object is probed for `text`, `content`, `message`, `answer` (in that
///    order) and the first present value is stringified recursively
/// 5. anything else falls back to pretty-printed JSON
///
/// The result is never a generic object placeholder.
pub fn stringify(value: &Value) -> String {
    stringify_at(value, 0)
}

fn stringify_at(value: &Value, depth: usize) -> String {
    if depth >= MAX_DEPTH {
        return pretty_json(value);
    }

    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Object(map) => {
            for key in TEXT_PROBE_KEYS {
                if let Some(inner) = map.get(key) {
                    if !inner.is_null() {
                        return stringify_at(inner, depth + 1);
                    }
                }
            }
            pretty_json(value)
        }
        _ => pretty_json(value),
    }
}

/// Pretty-printed JSON text as the last-resort rendering.
pub(crate) fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
