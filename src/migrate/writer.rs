//! Configuration-as-code YAML output

use super::MigrationError;
use crate::models::{CanonicalRecord, RecordKind};
use crate::storage::{StorageBackend, join_path};
use serde_yaml::{Mapping, Value};
use tracing::info;

/// Render one collection as a YAML document with a single top-level key.
///
/// Record keys keep the canonical struct order.
pub fn render_collection(
    kind: RecordKind,
    records: &[CanonicalRecord],
) -> Result<String, MigrationError> {
    let items = serde_yaml::to_value(records).map_err(|e| {
        MigrationError::Serialization(format!("Failed to serialize {} records: {}", kind, e))
    })?;

    let mut document = Mapping::new();
    document.insert(Value::String(kind.collection_key().to_string()), items);

    serde_yaml::to_string(&document).map_err(|e| {
        MigrationError::Serialization(format!("Failed to render {} document: {}", kind, e))
    })
}

/// Write one collection into `output_dir`, returning the file path.
pub fn write_collection<B: StorageBackend>(
    storage: &B,
    output_dir: &str,
    kind: RecordKind,
    records: &[CanonicalRecord],
) -> Result<String, MigrationError> {
    let path = join_path(output_dir, &kind.output_file_name());
    let yaml = render_collection(kind, records)?;

    storage.write_file(&path, yaml.as_bytes())?;

    info!("Wrote {} {} records to {}", records.len(), kind, path);
    Ok(path)
}
