//! Field sanitization
//!
//! Scalar coercion for loosely-typed export values, and removal of secret
//! material from credential inputs.

use serde_json::{Map, Value};

/// Credential input keys that never leave the source controller.
///
/// Matched exactly and case-sensitively, at the top level of `inputs` only.
pub const SENSITIVE_INPUT_KEYS: [&str; 7] = [
    "password",
    "secret",
    "ssh_key_data",
    "ssh_key_unlock",
    "token",
    "client_secret",
    "become_password",
];

/// Strip surrounding whitespace from a string value; any other value is
/// returned unchanged.
pub fn trim(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other.clone(),
    }
}

/// Copy of `inputs` without any [`SENSITIVE_INPUT_KEYS`].
///
/// Nested values are copied verbatim; secrets inside nested objects are not
/// searched for.
pub fn strip_secrets(inputs: &Map<String, Value>) -> Map<String, Value> {
    inputs
        .iter()
        .filter(|(key, _)| !SENSITIVE_INPUT_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// `null`, `""`, `{}` and `[]` are empty. `false` and `0` are values.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Read a scalar as a trimmed, non-empty string.
///
/// Numbers and booleans are rendered as text; nulls, blanks and containers
/// yield `None`.
pub fn string_field(value: Option<&Value>) -> Option<String> {
    match value.map(trim) {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

/// Loose truthiness: `false`, `0`, `null` and empty values are false.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        other => !is_empty_value(other),
    }
}

/// Read an integer from a number or numeric string.
pub fn integer_field(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
