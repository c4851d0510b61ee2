//! Credential type label mapping
//!
//! 2.4 exports name a credential's type by its category label; the 2.5
//! configuration collection expects the display name. Labels not in the table
//! pass through untouched so new or custom types keep working.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static CREDENTIAL_TYPE_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Machine", "Machine"),
        ("Source Control", "Source Control"),
        ("Vault", "Vault"),
        ("Amazon Web Services", "Amazon Web Services"),
        (
            "OpenShift or Kubernetes API Bearer Token",
            "OpenShift or Kubernetes API Bearer Token",
        ),
        (
            "OpenShift or Kubernetes API Certificate",
            "OpenShift or Kubernetes API Certificate",
        ),
    ])
});

/// Map a source label through the built-in table (exact, case-sensitive).
pub fn map_credential_type(label: &str) -> &str {
    CREDENTIAL_TYPE_LABELS.get(label).copied().unwrap_or(label)
}

/// Built-in label table plus user-supplied overrides.
///
/// Overrides are consulted first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialTypeMap {
    overrides: HashMap<String, String>,
}

impl CredentialTypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    pub fn map(&self, label: &str) -> String {
        match self.overrides.get(label) {
            Some(mapped) => mapped.clone(),
            None => map_credential_type(label).to_string(),
        }
    }
}
