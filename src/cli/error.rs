//! CLI-specific error types

use crate::config::ConfigError;
use crate::migrate::MigrationError;
use crate::verify::VerifyError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Migration error: {0}")]
    MigrationError(#[from] MigrationError),

    #[error("Verification error: {0}")]
    VerifyError(#[from] VerifyError),
}

