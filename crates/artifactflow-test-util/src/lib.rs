//! Shared test utilities for the artifactflow workspace.
//!
//! Lives in its own crate because `xtask` also needs `normalize_nondeterministic`
//! outside of `#[cfg(test)]`.

use serde_json::Value;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// - `tool.version` becomes `"__VERSION__"`, but only on the root object and only when
///   the root looks like a report envelope (`schema`, `tool`, `verdict`, `findings`).
/// - `started_at` / `finished_at` become `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("findings");
        if is_envelope
            && let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if let Some(slot) = map.get_mut(key) {
                    *slot = Value::String("__TIMESTAMP__".to_string());
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
