//! Shared test utilities for the docguard workspace.
//!
//! `xtask` needs `normalize_nondeterministic` at runtime (not behind `#[cfg(test)]`), so this
//! lives in its own crate rather than in a test module.

use serde_json::{Map, Value};

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Envelopes only**: `tool.version` becomes `"__VERSION__"` on the root object and on each
///    entry of a batch's `documents`, when that object looks like a report envelope (`schema`,
///    `tool`, `run`, plus `report` or `documents`). Rule details that happen to contain a
///    `tool` key are left alone.
///
/// 2. **Recursive**: `started_at` and `ended_at` become `"__TIMESTAMP__"` and `duration_ms`
///    becomes `0` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        normalize_tool_version(obj);
        if let Some(Value::Array(documents)) = obj.get_mut("documents") {
            for doc in documents.iter_mut().filter_map(Value::as_object_mut) {
                normalize_tool_version(doc);
            }
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_tool_version(obj: &mut Map<String, Value>) {
    let is_envelope = obj.contains_key("schema")
        && obj.contains_key("tool")
        && obj.contains_key("run")
        && (obj.contains_key("report") || obj.contains_key("documents"));
    if is_envelope
        && let Some(tool) = obj.get_mut("tool")
        && let Some(tool_obj) = tool.as_object_mut()
        && tool_obj.contains_key("version")
    {
        tool_obj.insert(
            "version".to_string(),
            Value::String("__VERSION__".to_string()),
        );
    }
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "ended_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            if map.contains_key("duration_ms") {
                map.insert("duration_ms".to_string(), Value::Number(0.into()));
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
