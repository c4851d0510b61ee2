//! Structural and field-level checks for one configuration document

use super::VerificationError;
use crate::models::RecordKind;
use serde_yaml::Value;

/// Check a YAML document for `kind`.
///
/// Parse failures and a missing or non-list top-level key are reported once
/// and end the check. Record-level problems are collected for every record.
pub fn check_document(kind: RecordKind, path: &str, content: &str) -> Vec<VerificationError> {
    // an empty file is an empty document, not a parse failure
    if content.trim().is_empty() {
        return vec![VerificationError::MissingTopLevelKey {
            path: path.to_string(),
            key: kind.collection_key(),
        }];
    }

    let document: Value = match serde_yaml::from_str(content) {
        Ok(document) => document,
        Err(e) => {
            return vec![VerificationError::Parse {
                path: path.to_string(),
                message: e.to_string(),
            }];
        }
    };

    let key = kind.collection_key();
    let items = match document.get(key) {
        None => {
            return vec![VerificationError::MissingTopLevelKey {
                path: path.to_string(),
                key,
            }];
        }
        Some(Value::Sequence(items)) => items,
        Some(_) => {
            return vec![VerificationError::TopLevelNotList {
                path: path.to_string(),
                key,
            }];
        }
    };

    check_records(kind, path, items)
}

/// Check every record of a collection.
///
/// Each record must be a mapping, carry every required field of its kind with
/// a non-empty value, and have a string `state` if it has one at all.
pub fn check_records(kind: RecordKind, path: &str, items: &[Value]) -> Vec<VerificationError> {
    let key = kind.collection_key();
    let mut errors = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let Value::Mapping(record) = item else {
            errors.push(VerificationError::RecordNotMapping {
                path: path.to_string(),
                key,
                index,
            });
            continue;
        };

        for &field in kind.required_fields() {
            if record.get(field).is_none_or(is_blank) {
                errors.push(VerificationError::MissingRequiredField {
                    path: path.to_string(),
                    key,
                    index,
                    field,
                });
            }
        }

        if let Some(state) = record.get("state")
            && !state.is_string()
        {
            errors.push(VerificationError::StateNotString {
                path: path.to_string(),
                key,
                index,
            });
        }
    }

    errors
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Tagged(_) => false,
    }
}
