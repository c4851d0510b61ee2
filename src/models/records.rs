//! Canonical 2.5 configuration-as-code records
//!
//! One struct per record kind. Field declaration order is the key order written
//! to YAML. Optional fields are skipped when `None` or empty, so a serialized
//! record never carries `null`, `""`, `{}` or `[]`.

use super::enums::{RecordKind, RecordState};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `controller_organizations` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    #[serde(default)]
    pub state: RecordState,
}

/// `controller_credentials` entry
///
/// `inputs` never contains secret material; it is reintroduced from a secret
/// store when the configuration is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_type: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub inputs: Map<String, Value>,
    #[serde(default)]
    pub state: RecordState,
}

/// `controller_projects` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub scm_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm_url: Option<String>,
    pub scm_branch: String,
    pub scm_update_on_launch: bool,
    pub allow_override: bool,
    #[serde(default)]
    pub state: RecordState,
}

/// `controller_inventories` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Inventory variables, either a mapping or a YAML/JSON text blob
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    pub kind: String,
    #[serde(default)]
    pub state: RecordState,
}

/// `controller_templates` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTemplate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_environment: Option<String>,
    pub job_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playbook: Option<String>,
    /// Credential names, in export order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub credentials: Vec<String>,
    pub survey_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    pub verbosity: i64,
    #[serde(default)]
    pub state: RecordState,
}

/// `controller_workflows` entry
///
/// Only the template object itself; workflow nodes are linked by the
/// configuration collection in a later step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTemplate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default)]
    pub state: RecordState,
}

/// `controller_execution_environments` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionEnvironment {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub pull: String,
    #[serde(default)]
    pub state: RecordState,
}

/// A canonical record of any kind.
///
/// Serializes as the inner record, with no variant tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CanonicalRecord {
    Organization(Organization),
    Credential(Credential),
    Project(Project),
    Inventory(Inventory),
    JobTemplate(JobTemplate),
    WorkflowTemplate(WorkflowTemplate),
    ExecutionEnvironment(ExecutionEnvironment),
}

impl CanonicalRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            CanonicalRecord::Organization(_) => RecordKind::Organization,
            CanonicalRecord::Credential(_) => RecordKind::Credential,
            CanonicalRecord::Project(_) => RecordKind::Project,
            CanonicalRecord::Inventory(_) => RecordKind::Inventory,
            CanonicalRecord::JobTemplate(_) => RecordKind::JobTemplate,
            CanonicalRecord::WorkflowTemplate(_) => RecordKind::WorkflowTemplate,
            CanonicalRecord::ExecutionEnvironment(_) => RecordKind::ExecutionEnvironment,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CanonicalRecord::Organization(r) => &r.name,
            CanonicalRecord::Credential(r) => &r.name,
            CanonicalRecord::Project(r) => &r.name,
            CanonicalRecord::Inventory(r) => &r.name,
            CanonicalRecord::JobTemplate(r) => &r.name,
            CanonicalRecord::WorkflowTemplate(r) => &r.name,
            CanonicalRecord::ExecutionEnvironment(r) => &r.name,
        }
    }
}
