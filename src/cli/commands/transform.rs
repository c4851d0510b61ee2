//! Transform command implementation

use super::load_config;
use crate::cli::error::CliError;
use crate::migrate::{MigrationError, Migrator};
use crate::models::RecordKind;
use crate::normalize::RecordNormalizer;
use crate::storage::FileSystemStorageBackend;
use crate::verify::{EXIT_FAILED, EXIT_OK};
use std::path::PathBuf;

/// Arguments for the transform command
#[derive(Debug, Clone, Default)]
pub struct TransformArgs {
    /// Overrides `paths.export_dir`
    pub export_dir: Option<String>,
    /// Overrides `paths.output_dir`
    pub output_dir: Option<String>,
    /// Kinds to migrate; empty means all
    pub kinds: Vec<RecordKind>,
    pub config: Option<PathBuf>,
}

/// Handle the transform command, returning the process exit status
///
/// A missing export directory exits 2 without writing anything.
pub fn handle_transform(args: &TransformArgs) -> Result<i32, CliError> {
    let config = load_config(args.config.as_deref())?;

    let export_dir = args
        .export_dir
        .clone()
        .unwrap_or_else(|| config.paths.export_dir.clone());
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.paths.output_dir.clone());

    let migrator = Migrator::new(FileSystemStorageBackend::current_dir())
        .with_normalizer(RecordNormalizer::with_credential_types(
            config.credential_type_map(),
        ))
        .with_kinds(&args.kinds);

    match migrator.migrate(&export_dir, &output_dir) {
        Ok(_) => {
            println!("Wrote YAML to {}/", output_dir.trim_end_matches('/'));
            Ok(EXIT_OK)
        }
        Err(MigrationError::ExportDirNotFound(dir)) => {
            eprintln!(
                "ERROR: Missing {} directory. Export the source controller first.",
                dir
            );
            Ok(EXIT_FAILED)
        }
        Err(e) => Err(e.into()),
    }
}
