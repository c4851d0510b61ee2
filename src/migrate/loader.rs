//! Export collection loading
//!
//! Each record kind is exported as one JSON array document. A kind with no
//! export file simply has no records.

use super::MigrationError;
use crate::models::RecordKind;
use crate::storage::{StorageBackend, join_path};
use serde_json::Value;
use tracing::{info, warn};

/// Load the raw records of one kind from `export_dir`.
///
/// A missing file yields an empty collection. A file that is not a JSON
/// array is an error.
pub fn load_collection<B: StorageBackend>(
    storage: &B,
    export_dir: &str,
    kind: RecordKind,
) -> Result<Vec<Value>, MigrationError> {
    let path = join_path(export_dir, kind.export_file_name());

    if !storage.file_exists(&path)? {
        warn!("No {} export at {}; treating as empty", kind, path);
        return Ok(Vec::new());
    }

    let content = storage.read_to_string(&path)?;
    let document: Value = serde_json::from_str(&content).map_err(|e| MigrationError::Parse {
        path: path.clone(),
        message: e.to_string(),
    })?;

    match document {
        Value::Array(records) => {
            info!("Loaded {} {} records from {}", records.len(), kind, path);
            Ok(records)
        }
        // an empty export file is occasionally written as `null`
        Value::Null => Ok(Vec::new()),
        _ => Err(MigrationError::NotACollection { path }),
    }
}
