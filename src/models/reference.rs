//! Name-based references between records
//!
//! An export may describe a relationship in two shapes:
//! - Name: a bare string (e.g. `"Default"`)
//! - Record: an embedded object carrying a `name` key (e.g. `{"id": 1, "name": "Default"}`)
//!
//! Anything else (numeric ids, booleans, null) cannot be turned into a name and
//! is not a reference at all.

use serde_json::{Map, Value};

/// A relationship to another record, as found in a raw export.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference {
    /// Bare name string
    Name(String),
    /// Embedded record, resolved through its `name` key
    Record(Map<String, Value>),
}

impl Reference {
    /// Classify a raw value. Returns `None` for values that are neither a
    /// string nor an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Reference::Name(s.clone())),
            Value::Object(map) => Some(Reference::Record(map.clone())),
            _ => None,
        }
    }

    /// The referenced record's name, trimmed. Blank names resolve to `None`.
    pub fn name(&self) -> Option<String> {
        match self {
            Reference::Name(name) => non_blank(name),
            Reference::Record(map) => match map.get("name") {
                Some(Value::String(name)) => non_blank(name),
                _ => None,
            },
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Resolve an optional raw value to a plain name.
///
/// Never fails: absent, null and unresolvable values all yield `None`, and the
/// caller decides whether that omits a field or drops a list entry.
///
/// # Example
///
/// ```rust
/// use cac_migrate::models::reference::resolve_name;
/// use serde_json::json;
///
/// assert_eq!(resolve_name(Some(&json!({"name": "Prod"}))), Some("Prod".to_string()));
/// assert_eq!(resolve_name(Some(&json!("Prod"))), Some("Prod".to_string()));
/// assert_eq!(resolve_name(Some(&json!(7))), None);
/// assert_eq!(resolve_name(None), None);
/// ```
pub fn resolve_name(value: Option<&Value>) -> Option<String> {
    value.and_then(Reference::from_value).and_then(|r| r.name())
}
