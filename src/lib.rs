//! cac-migrate - Controller 2.4 export to 2.5 configuration-as-code migration
//!
//! Provides:
//! - Record normalization for the seven migrated object kinds
//! - Reference resolution, secret stripping and credential type mapping
//! - Migration of a JSON export directory into `controller_*.yml` files
//! - Structural verification of the generated YAML
//! - File/folder operations via storage backends

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod migrate;
pub mod models;
pub mod normalize;
pub mod storage;
pub mod verify;

// Re-export commonly used types
pub use config::{ConfigError, MigrationConfig};
pub use migrate::{MigrationError, MigrationSummary, Migrator};
pub use models::{CanonicalRecord, RecordKind, RecordState, Reference};
pub use normalize::{CredentialTypeMap, NormalizeError, RecordNormalizer};
pub use storage::{FileSystemStorageBackend, MemoryStorageBackend, StorageBackend, StorageError};
pub use verify::{
    VerificationError, VerificationOutcome, VerificationReport, VerificationWarning, Verifier,
    VerifyError,
};
