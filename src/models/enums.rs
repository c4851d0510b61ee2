//! Enums for configuration records
//!
//! # Serde Casing Conventions
//!
//! - `snake_case`: record kind identifiers (RecordKind), matching the names used
//!   by the `--kind` flag and in log output
//! - `lowercase`: the desired-state keyword written into every record (RecordState)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven configuration record kinds carried across a migration.
///
/// Each kind fixes three names: the JSON file the 2.4 export writes, the YAML
/// file the 2.5 configuration-as-code collection reads, and the top-level key
/// inside that YAML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Organization,
    Credential,
    Project,
    Inventory,
    JobTemplate,
    WorkflowTemplate,
    ExecutionEnvironment,
}

impl RecordKind {
    /// All kinds, in the order they are migrated and verified.
    pub const ALL: [RecordKind; 7] = [
        RecordKind::Organization,
        RecordKind::Credential,
        RecordKind::Project,
        RecordKind::Inventory,
        RecordKind::JobTemplate,
        RecordKind::WorkflowTemplate,
        RecordKind::ExecutionEnvironment,
    ];

    /// Stable identifier, e.g. `job_template`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Organization => "organization",
            RecordKind::Credential => "credential",
            RecordKind::Project => "project",
            RecordKind::Inventory => "inventory",
            RecordKind::JobTemplate => "job_template",
            RecordKind::WorkflowTemplate => "workflow_template",
            RecordKind::ExecutionEnvironment => "execution_environment",
        }
    }

    /// File name of the raw export collection, e.g. `job_templates.json`.
    pub fn export_file_name(&self) -> &'static str {
        match self {
            RecordKind::Organization => "organizations.json",
            RecordKind::Credential => "credentials.json",
            RecordKind::Project => "projects.json",
            RecordKind::Inventory => "inventories.json",
            RecordKind::JobTemplate => "job_templates.json",
            RecordKind::WorkflowTemplate => "workflow_job_templates.json",
            RecordKind::ExecutionEnvironment => "execution_environments.json",
        }
    }

    /// Top-level key of the canonical YAML document, e.g. `controller_templates`.
    pub fn collection_key(&self) -> &'static str {
        match self {
            RecordKind::Organization => "controller_organizations",
            RecordKind::Credential => "controller_credentials",
            RecordKind::Project => "controller_projects",
            RecordKind::Inventory => "controller_inventories",
            RecordKind::JobTemplate => "controller_templates",
            RecordKind::WorkflowTemplate => "controller_workflows",
            RecordKind::ExecutionEnvironment => "controller_execution_environments",
        }
    }

    /// File name of the canonical YAML document: the collection key plus `.yml`.
    pub fn output_file_name(&self) -> String {
        format!("{}.yml", self.collection_key())
    }

    /// Minimum set of fields a canonical record must carry to be applied.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Credential => &["name", "credential_type"],
            RecordKind::JobTemplate => &["name", "project", "job_type"],
            RecordKind::ExecutionEnvironment => &["name", "image"],
            RecordKind::Organization
            | RecordKind::Project
            | RecordKind::Inventory
            | RecordKind::WorkflowTemplate => &["name"],
        }
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown record kind: {}. Use one of: {}",
                    s,
                    RecordKind::ALL
                        .iter()
                        .map(|k| k.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Desired state of a record on the target controller.
///
/// Migration only ever produces `present`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordState {
    #[default]
    Present,
}
