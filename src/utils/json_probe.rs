//! Dot-path probing over decoded JSON values.
//!
//! The backend has no fixed response contract across versions, so decoding
//! happens into a generic `serde_json::Value` followed by ordered field
//! probes ("try this path, else fall through") rather than a single
//! structural parse.

use serde_json::Value;

/// Look up a nested value using a dot-notation path (e.g. `"data.answer"`).
///
/// Only object-key segments are supported; any segment that does not resolve
/// yields `None`.
pub fn get_path<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let mut current = obj;
    for part in path.split('.') {
        if part.is_empty() {
            return None;
        }
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

/// The first value present among `paths`, probed in order.
///
/// `Null` counts as absent so an explicit `"answer": null` falls through to
/// the next candidate.
pub fn first_present<'a>(obj: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths
        .iter()
        .filter_map(|p| get_path(obj, p))
        .find(|v| !v.is_null())
}

/// Non-empty string at `key`, if the field holds one.
pub fn non_empty_str<'a>(obj: &'a Value, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
