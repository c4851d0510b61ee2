//! Migration orchestration
//!
//! Loads every export collection, normalizes each record, and writes one
//! configuration-as-code YAML file per record kind.
//!
//! Input directory (default `./_export_24`):
//! - `organizations.json`, `credentials.json`, `projects.json`,
//!   `inventories.json`, `job_templates.json`, `workflow_job_templates.json`,
//!   `execution_environments.json`
//!
//! Output directory (default `./_cac_25`):
//! - `controller_<collection>.yml` per kind, see [`RecordKind::collection_key`]

pub mod loader;
pub mod writer;

use crate::models::{CanonicalRecord, RecordKind};
use crate::normalize::{NormalizeError, RecordNormalizer};
use crate::storage::{StorageBackend, StorageError};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

pub use loader::load_collection;
pub use writer::{render_collection, write_collection};

/// Error during migration
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Export directory not found: {0}")]
    ExportDirNotFound(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Failed to parse JSON export {path}: {message}")]
    Parse { path: String, message: String },
    #[error("Export {path} must contain a JSON array")]
    NotACollection { path: String },
    #[error("Failed to normalize {kind} record {index}: {source}")]
    Normalize {
        kind: RecordKind,
        index: usize,
        #[source]
        source: NormalizeError,
    },
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Records written for one kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionSummary {
    pub kind: RecordKind,
    pub records: usize,
    pub path: String,
}

/// Result of a migration run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use = "the migration summary lists what was written"]
pub struct MigrationSummary {
    pub output_dir: String,
    pub collections: Vec<CollectionSummary>,
}

impl MigrationSummary {
    pub fn total_records(&self) -> usize {
        self.collections.iter().map(|c| c.records).sum()
    }
}

/// Migration orchestrator over a storage backend
pub struct Migrator<B: StorageBackend> {
    storage: B,
    normalizer: RecordNormalizer,
    kinds: Vec<RecordKind>,
}

impl<B: StorageBackend> Migrator<B> {
    /// Create a migrator for all record kinds with the default normalizer
    pub fn new(storage: B) -> Self {
        Self {
            storage,
            normalizer: RecordNormalizer::new(),
            kinds: RecordKind::ALL.to_vec(),
        }
    }

    pub fn with_normalizer(mut self, normalizer: RecordNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Restrict the run to the given kinds. An empty list keeps all kinds.
    pub fn with_kinds(mut self, kinds: &[RecordKind]) -> Self {
        if !kinds.is_empty() {
            self.kinds = RecordKind::ALL
                .into_iter()
                .filter(|kind| kinds.contains(kind))
                .collect();
        }
        self
    }

    pub fn storage(&self) -> &B {
        &self.storage
    }

    /// Normalize a raw collection, preserving order.
    ///
    /// The first failing record aborts the collection.
    pub fn normalize_collection(
        &self,
        kind: RecordKind,
        raw: &[Value],
    ) -> Result<Vec<CanonicalRecord>, MigrationError> {
        raw.iter()
            .enumerate()
            .map(|(index, record)| {
                self.normalizer
                    .normalize(kind, record)
                    .map_err(|source| MigrationError::Normalize {
                        kind,
                        index,
                        source,
                    })
            })
            .collect()
    }

    /// Run the migration.
    ///
    /// All selected kinds are loaded and normalized before anything is
    /// written, so a bad record leaves the output directory untouched.
    /// Individual export files may be absent; the export directory may not.
    pub fn migrate(
        &self,
        export_dir: &str,
        output_dir: &str,
    ) -> Result<MigrationSummary, MigrationError> {
        if !self.storage.dir_exists(export_dir)? {
            return Err(MigrationError::ExportDirNotFound(export_dir.to_string()));
        }

        let mut normalized = Vec::with_capacity(self.kinds.len());
        for &kind in &self.kinds {
            let raw = load_collection(&self.storage, export_dir, kind)?;
            normalized.push((kind, self.normalize_collection(kind, &raw)?));
        }

        if !self.storage.dir_exists(output_dir)? {
            self.storage.create_dir(output_dir)?;
        }

        let mut collections = Vec::with_capacity(normalized.len());
        for (kind, records) in normalized {
            let path = write_collection(&self.storage, output_dir, kind, &records)?;
            collections.push(CollectionSummary {
                kind,
                records: records.len(),
                path,
            });
        }

        let summary = MigrationSummary {
            output_dir: output_dir.to_string(),
            collections,
        };
        info!(
            "Migrated {} records across {} collections into {}",
            summary.total_records(),
            summary.collections.len(),
            output_dir
        );
        Ok(summary)
    }
}
