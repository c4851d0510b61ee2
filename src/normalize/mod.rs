//! Record normalization
//!
//! Maps raw 2.4 export records onto the canonical 2.5 record structs:
//! - Relationships are resolved to names (see [`crate::models::reference`])
//! - Credential inputs lose their secret material
//! - Credential type labels go through the type mapper
//! - Per-kind defaults fill the fields the configuration collection expects
//!
//! Every normalizer is a pure function of one raw record. Extra raw fields are
//! ignored.

pub mod credential_types;
pub mod sanitize;

use crate::models::reference::resolve_name;
use crate::models::{
    CanonicalRecord, Credential, ExecutionEnvironment, Inventory, JobTemplate, Organization,
    Project, RecordKind, RecordState, WorkflowTemplate,
};
use serde_json::{Map, Value};
use tracing::debug;

pub use credential_types::{CredentialTypeMap, map_credential_type};
pub use sanitize::{SENSITIVE_INPUT_KEYS, strip_secrets, trim};

/// A raw export record: an arbitrary JSON object.
pub type RawRecord = Map<String, Value>;

/// Error during normalization
///
/// Any of these aborts a migration run; a partially normalized collection is
/// never written.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("{kind} record must be a JSON object, found {found}")]
    NotAnObject { kind: RecordKind, found: &'static str },
    #[error("{kind} record has no usable name")]
    MissingName { kind: RecordKind },
}

/// Normalizer for all seven record kinds.
///
/// # Example
///
/// ```rust
/// use cac_migrate::normalize::RecordNormalizer;
/// use serde_json::json;
///
/// let normalizer = RecordNormalizer::new();
/// let project = normalizer
///     .project(&json!({"name": " Web ", "scm_url": "https://x/y.git"}))
///     .unwrap();
/// assert_eq!(project.name, "Web");
/// assert_eq!(project.scm_type, "git");
/// assert_eq!(project.scm_branch, "main");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordNormalizer {
    credential_types: CredentialTypeMap,
}

impl RecordNormalizer {
    /// Create a normalizer using only the built-in credential type table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer with additional credential type label mappings
    pub fn with_credential_types(credential_types: CredentialTypeMap) -> Self {
        Self { credential_types }
    }

    /// Normalize a raw record of the given kind
    pub fn normalize(
        &self,
        kind: RecordKind,
        raw: &Value,
    ) -> Result<CanonicalRecord, NormalizeError> {
        Ok(match kind {
            RecordKind::Organization => CanonicalRecord::Organization(self.organization(raw)?),
            RecordKind::Credential => CanonicalRecord::Credential(self.credential(raw)?),
            RecordKind::Project => CanonicalRecord::Project(self.project(raw)?),
            RecordKind::Inventory => CanonicalRecord::Inventory(self.inventory(raw)?),
            RecordKind::JobTemplate => CanonicalRecord::JobTemplate(self.job_template(raw)?),
            RecordKind::WorkflowTemplate => {
                CanonicalRecord::WorkflowTemplate(self.workflow_template(raw)?)
            }
            RecordKind::ExecutionEnvironment => {
                CanonicalRecord::ExecutionEnvironment(self.execution_environment(raw)?)
            }
        })
    }

    pub fn organization(&self, raw: &Value) -> Result<Organization, NormalizeError> {
        let record = as_record(RecordKind::Organization, raw)?;
        Ok(Organization {
            name: required_name(RecordKind::Organization, record)?,
            state: RecordState::Present,
        })
    }

    /// Credential type comes from the embedded `credential_type` object (or
    /// label), then `summary_fields.credential_type`, then `kind`.
    pub fn credential(&self, raw: &Value) -> Result<Credential, NormalizeError> {
        let record = as_record(RecordKind::Credential, raw)?;

        let credential_type = resolve_name(record.get("credential_type"))
            .or_else(|| resolve_name(summary_field(record, "credential_type")))
            .or_else(|| sanitize::string_field(record.get("kind")))
            .map(|label| self.credential_types.map(&label));

        let organization = reference(record, "organization")
            .or_else(|| resolve_name(record.get("organization_id")));

        let inputs = match record.get("inputs") {
            Some(Value::Object(inputs)) => strip_secrets(inputs),
            _ => Map::new(),
        };

        Ok(Credential {
            name: required_name(RecordKind::Credential, record)?,
            description: sanitize::string_field(record.get("description")),
            organization,
            credential_type,
            inputs,
            state: RecordState::Present,
        })
    }

    /// Projects without an explicit `scm_type` are `git` when they carry an
    /// `scm_url`, otherwise `manual`.
    pub fn project(&self, raw: &Value) -> Result<Project, NormalizeError> {
        let record = as_record(RecordKind::Project, raw)?;

        let scm_url = sanitize::string_field(record.get("scm_url"));
        let scm_type = sanitize::string_field(record.get("scm_type"))
            .unwrap_or_else(|| (if scm_url.is_some() { "git" } else { "manual" }).to_string());

        Ok(Project {
            name: required_name(RecordKind::Project, record)?,
            description: sanitize::string_field(record.get("description")),
            organization: reference(record, "organization"),
            scm_type,
            scm_url,
            scm_branch: sanitize::string_field(record.get("scm_branch"))
                .unwrap_or_else(|| "main".to_string()),
            scm_update_on_launch: flag_or_true(record, "scm_update_on_launch"),
            allow_override: flag_or_true(record, "allow_override"),
            state: RecordState::Present,
        })
    }

    pub fn inventory(&self, raw: &Value) -> Result<Inventory, NormalizeError> {
        let record = as_record(RecordKind::Inventory, raw)?;

        let variables = record
            .get("variables")
            .map(trim)
            .filter(|v| !sanitize::is_empty_value(v));

        Ok(Inventory {
            name: required_name(RecordKind::Inventory, record)?,
            description: sanitize::string_field(record.get("description")),
            organization: reference(record, "organization"),
            variables,
            kind: sanitize::string_field(record.get("kind"))
                .unwrap_or_else(|| "normal".to_string()),
            state: RecordState::Present,
        })
    }

    /// Unresolvable credential references are dropped; the rest keep export
    /// order.
    pub fn job_template(&self, raw: &Value) -> Result<JobTemplate, NormalizeError> {
        let record = as_record(RecordKind::JobTemplate, raw)?;
        let name = required_name(RecordKind::JobTemplate, record)?;

        Ok(JobTemplate {
            description: sanitize::string_field(record.get("description")),
            organization: reference(record, "organization"),
            project: reference(record, "project"),
            inventory: reference(record, "inventory"),
            execution_environment: reference(record, "execution_environment"),
            job_type: sanitize::string_field(record.get("job_type"))
                .unwrap_or_else(|| "run".to_string()),
            playbook: sanitize::string_field(record.get("playbook")),
            credentials: credential_names(record, &name),
            survey_enabled: record.get("survey_enabled").is_some_and(sanitize::truthy),
            limit: sanitize::string_field(record.get("limit")),
            verbosity: sanitize::integer_field(record.get("verbosity")).unwrap_or(0),
            state: RecordState::Present,
            name,
        })
    }

    pub fn workflow_template(&self, raw: &Value) -> Result<WorkflowTemplate, NormalizeError> {
        let record = as_record(RecordKind::WorkflowTemplate, raw)?;
        Ok(WorkflowTemplate {
            name: required_name(RecordKind::WorkflowTemplate, record)?,
            description: sanitize::string_field(record.get("description")),
            organization: reference(record, "organization"),
            state: RecordState::Present,
        })
    }

    /// A missing `image` is left out rather than rejected; verification
    /// reports it.
    pub fn execution_environment(
        &self,
        raw: &Value,
    ) -> Result<ExecutionEnvironment, NormalizeError> {
        let record = as_record(RecordKind::ExecutionEnvironment, raw)?;
        Ok(ExecutionEnvironment {
            name: required_name(RecordKind::ExecutionEnvironment, record)?,
            image: sanitize::string_field(record.get("image")),
            organization: reference(record, "organization"),
            pull: sanitize::string_field(record.get("pull"))
                .unwrap_or_else(|| "missing".to_string()),
            state: RecordState::Present,
        })
    }
}

fn as_record(kind: RecordKind, raw: &Value) -> Result<&RawRecord, NormalizeError> {
    raw.as_object().ok_or(NormalizeError::NotAnObject {
        kind,
        found: json_type_name(raw),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn required_name(kind: RecordKind, record: &RawRecord) -> Result<String, NormalizeError> {
    sanitize::string_field(record.get("name")).ok_or(NormalizeError::MissingName { kind })
}

/// API exports carry numeric ids in relationship fields and the related
/// object's name under `summary_fields`.
fn summary_field<'a>(record: &'a RawRecord, field: &str) -> Option<&'a Value> {
    record.get("summary_fields").and_then(|s| s.get(field))
}

fn reference(record: &RawRecord, field: &str) -> Option<String> {
    resolve_name(record.get(field)).or_else(|| resolve_name(summary_field(record, field)))
}

fn flag_or_true(record: &RawRecord, field: &str) -> bool {
    record.get(field).is_none_or(sanitize::truthy)
}

fn credential_names(record: &RawRecord, template: &str) -> Vec<String> {
    let entries = record
        .get("credentials")
        .filter(|v| !v.is_null())
        .or_else(|| summary_field(record, "credentials"));

    let Some(Value::Array(entries)) = entries else {
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let name = resolve_name(Some(entry));
            if name.is_none() {
                debug!(
                    "Dropping unresolvable credential reference {} on job template '{}': {}",
                    index, template, entry
                );
            }
            name
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_records() {
        let err = RecordNormalizer::new()
            .organization(&json!(["Default"]))
            .unwrap_err();
        assert_eq!(
            err,
            NormalizeError::NotAnObject {
                kind: RecordKind::Organization,
                found: "array"
            }
        );
    }

    #[test]
    fn rejects_records_without_a_name() {
        let err = RecordNormalizer::new()
            .project(&json!({"name": "  ", "scm_url": "https://x/y.git"}))
            .unwrap_err();
        assert_eq!(
            err,
            NormalizeError::MissingName {
                kind: RecordKind::Project
            }
        );
        assert_eq!(err.to_string(), "project record has no usable name");
    }

    #[test]
    fn references_fall_back_to_summary_fields() {
        let raw = json!({
            "name": "Deploy",
            "organization": 3,
            "project": 12,
            "summary_fields": {
                "organization": {"id": 3, "name": "Default"},
                "project": {"id": 12, "name": "Playbooks"}
            }
        });
        let jt = RecordNormalizer::new().job_template(&raw).unwrap();
        assert_eq!(jt.organization.as_deref(), Some("Default"));
        assert_eq!(jt.project.as_deref(), Some("Playbooks"));
        assert_eq!(jt.inventory, None);
    }

    #[test]
    fn direct_reference_wins_over_summary_fields() {
        let raw = json!({
            "name": "Deploy",
            "organization": "Engineering",
            "summary_fields": {"organization": {"name": "Default"}}
        });
        let wf = RecordNormalizer::new().workflow_template(&raw).unwrap();
        assert_eq!(wf.organization.as_deref(), Some("Engineering"));
    }

    #[test]
    fn job_template_credentials_fall_back_to_summary_fields() {
        let raw = json!({
            "name": "Deploy",
            "summary_fields": {
                "credentials": [{"id": 1, "name": "Machine Cred", "kind": "ssh"}]
            }
        });
        let jt = RecordNormalizer::new().job_template(&raw).unwrap();
        assert_eq!(jt.credentials, vec!["Machine Cred".to_string()]);
    }

    #[test]
    fn credential_type_from_summary_fields_before_kind() {
        let raw = json!({
            "name": "Cloud",
            "credential_type": 5,
            "kind": "aws",
            "summary_fields": {"credential_type": {"id": 5, "name": "Amazon Web Services"}}
        });
        let cred = RecordNormalizer::new().credential(&raw).unwrap();
        assert_eq!(cred.credential_type.as_deref(), Some("Amazon Web Services"));
    }

    #[test]
    fn dispatch_matches_kind() {
        let normalizer = RecordNormalizer::new();
        for kind in RecordKind::ALL {
            let record = normalizer.normalize(kind, &json!({"name": "x"})).unwrap();
            assert_eq!(record.kind(), kind);
            assert_eq!(record.name(), "x");
        }
    }
}
