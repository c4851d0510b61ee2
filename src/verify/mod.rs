//! Verification of generated configuration-as-code YAML
//!
//! For each expected collection file:
//! 1. A missing file is a warning
//! 2. The file must parse as YAML
//! 3. It must hold the kind's top-level key with a list value
//! 4. Every record must satisfy the kind's minimal field contract
//!
//! Errors fail verification. Warnings pass it, unless strict mode promotes
//! them to failures.

pub mod checks;

use crate::models::RecordKind;
use crate::storage::{StorageBackend, StorageError, join_path};
use serde::Serialize;
use tracing::{debug, info};

pub use checks::{check_document, check_records};

/// Exit status for a passing verification
pub const EXIT_OK: i32 = 0;

/// Exit status for a failing verification or an unusable directory
pub const EXIT_FAILED: i32 = 2;

/// Non-fatal finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum VerificationWarning {
    #[error("Missing expected file: {path}")]
    MissingFile { path: String },
}

/// Finding that fails verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum VerificationError {
    #[error("Failed to read {path}: {message}")]
    Unreadable { path: String, message: String },
    #[error("Failed to parse YAML: {path} :: {message}")]
    Parse { path: String, message: String },
    #[error("{path}: Missing top-level key '{key}'.")]
    MissingTopLevelKey { path: String, key: &'static str },
    #[error("{path}: Top-level key '{key}' must be a list.")]
    TopLevelNotList { path: String, key: &'static str },
    #[error("{path}: [{key}][{index}] must be a mapping.")]
    RecordNotMapping {
        path: String,
        key: &'static str,
        index: usize,
    },
    #[error("{path}: [{key}][{index}] missing required field '{field}'.")]
    MissingRequiredField {
        path: String,
        key: &'static str,
        index: usize,
        field: &'static str,
    },
    #[error("{path}: [{key}][{index}] field 'state' must be a string if present.")]
    StateNotString {
        path: String,
        key: &'static str,
        index: usize,
    },
}

/// Error that prevents verification from running at all
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("Path not found: {0}")]
    PathNotFound(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Overall verification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerificationOutcome {
    Pass,
    Warn,
    Fail,
}

impl VerificationOutcome {
    /// `Pass` and `Warn` exit 0; `Fail` exits 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            VerificationOutcome::Pass | VerificationOutcome::Warn => EXIT_OK,
            VerificationOutcome::Fail => EXIT_FAILED,
        }
    }
}

/// All findings of one verification run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[must_use = "verification reports should be checked for errors and warnings"]
pub struct VerificationReport {
    pub warnings: Vec<VerificationWarning>,
    pub errors: Vec<VerificationError>,
}

impl VerificationReport {
    /// Errors fail; warnings fail only in strict mode.
    pub fn outcome(&self, strict: bool) -> VerificationOutcome {
        if !self.errors.is_empty() {
            VerificationOutcome::Fail
        } else if self.warnings.is_empty() {
            VerificationOutcome::Pass
        } else if strict {
            VerificationOutcome::Fail
        } else {
            VerificationOutcome::Warn
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Verifier over a storage backend
pub struct Verifier<B: StorageBackend> {
    storage: B,
    kinds: Vec<RecordKind>,
}

impl<B: StorageBackend> Verifier<B> {
    /// Create a verifier expecting all seven collection files
    pub fn new(storage: B) -> Self {
        Self {
            storage,
            kinds: RecordKind::ALL.to_vec(),
        }
    }

    /// Expect only the given kinds. An empty list keeps all kinds.
    pub fn with_kinds(mut self, kinds: &[RecordKind]) -> Self {
        if !kinds.is_empty() {
            self.kinds = RecordKind::ALL
                .into_iter()
                .filter(|kind| kinds.contains(kind))
                .collect();
        }
        self
    }

    /// Verify the collection files in `dir`.
    ///
    /// Fails only when `dir` does not exist; every other problem is a finding
    /// in the returned report.
    pub fn verify(&self, dir: &str) -> Result<VerificationReport, VerifyError> {
        if !self.storage.dir_exists(dir)? {
            return Err(VerifyError::PathNotFound(dir.to_string()));
        }

        let mut report = VerificationReport::default();

        for &kind in &self.kinds {
            let path = join_path(dir, &kind.output_file_name());

            if !self.storage.file_exists(&path)? {
                report
                    .warnings
                    .push(VerificationWarning::MissingFile { path });
                continue;
            }

            let content = match self.storage.read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    report.errors.push(VerificationError::Unreadable {
                        path,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            let errors = check_document(kind, &path, &content);
            debug!("{}: {} findings", path, errors.len());
            report.errors.extend(errors);
        }

        info!(
            "Verified {}: {} errors, {} warnings",
            dir,
            report.errors.len(),
            report.warnings.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorageBackend;

    #[test]
    fn outcome_state_machine() {
        let clean = VerificationReport::default();
        assert_eq!(clean.outcome(false), VerificationOutcome::Pass);
        assert_eq!(clean.outcome(true), VerificationOutcome::Pass);

        let warned = VerificationReport {
            warnings: vec![VerificationWarning::MissingFile {
                path: "x.yml".to_string(),
            }],
            errors: vec![],
        };
        assert_eq!(warned.outcome(false), VerificationOutcome::Warn);
        assert_eq!(warned.outcome(false).exit_code(), 0);
        assert_eq!(warned.outcome(true), VerificationOutcome::Fail);
        assert_eq!(warned.outcome(true).exit_code(), 2);

        let failed = VerificationReport {
            warnings: vec![],
            errors: vec![VerificationError::TopLevelNotList {
                path: "x.yml".to_string(),
                key: "controller_projects",
            }],
        };
        assert_eq!(failed.outcome(false), VerificationOutcome::Fail);
    }

    #[test]
    fn missing_directory_is_fatal() {
        let verifier = Verifier::new(MemoryStorageBackend::new());
        assert!(matches!(
            verifier.verify("_cac_25"),
            Err(VerifyError::PathNotFound(_))
        ));
    }

    #[test]
    fn only_selected_kinds_are_expected() {
        let storage = MemoryStorageBackend::new()
            .with_file("out/controller_projects.yml", "controller_projects: []\n");
        let report = Verifier::new(storage)
            .with_kinds(&[RecordKind::Project])
            .verify("out")
            .unwrap();
        assert!(report.is_clean());
    }
}
