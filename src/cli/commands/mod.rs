//! CLI command implementations

pub mod transform;
pub mod verify;

use crate::cli::error::CliError;
use crate::config::MigrationConfig;
use std::path::Path;

/// Load an explicit config file, or `.cac-migrate.toml` from the working
/// directory when none is given.
pub fn load_config(path: Option<&Path>) -> Result<MigrationConfig, CliError> {
    match path {
        Some(path) if !path.exists() => Err(CliError::ConfigNotFound(path.to_path_buf())),
        Some(path) => Ok(MigrationConfig::load_file(path)?),
        None => Ok(MigrationConfig::load(Path::new("."))?),
    }
}
