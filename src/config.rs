//! Migration configuration file support
//!
//! Handles parsing of `.cac-migrate.toml` configuration files and
//! environment variable overrides.

use crate::normalize::CredentialTypeMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default configuration filename
pub const CONFIG_FILENAME: &str = ".cac-migrate.toml";

/// Default directory holding the 2.4 JSON export
pub const DEFAULT_EXPORT_DIR: &str = "./_export_24";

/// Default directory receiving the 2.5 configuration-as-code YAML
pub const DEFAULT_OUTPUT_DIR: &str = "./_cac_25";

/// Environment variable for the export directory
pub const ENV_EXPORT_DIR: &str = "CAC_MIGRATE_EXPORT_DIR";

/// Environment variable for the output directory
pub const ENV_OUTPUT_DIR: &str = "CAC_MIGRATE_OUTPUT_DIR";

/// Environment variable for strict verification (`1`/`true`/`yes`)
pub const ENV_STRICT: &str = "CAC_MIGRATE_STRICT";

/// Error loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Config error: {0}")]
    ParseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Paths configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsSection {
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_export_dir() -> String {
    DEFAULT_EXPORT_DIR.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            output_dir: default_output_dir(),
        }
    }
}

/// Verification configuration section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifySection {
    /// Treat warnings (missing files) as failures
    #[serde(default)]
    pub strict: bool,
}

/// Main configuration structure
///
/// Represents the `.cac-migrate.toml` configuration file format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrationConfig {
    #[serde(default)]
    pub paths: PathsSection,

    #[serde(default)]
    pub verify: VerifySection,

    /// Extra credential type label mappings, source label to 2.5 display name
    #[serde(default)]
    pub credential_types: HashMap<String, String>,
}

impl MigrationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a directory
    ///
    /// Looks for `.cac-migrate.toml` in `dir`, falling back to defaults, then
    /// applies environment variable overrides.
    pub fn load(dir: &Path) -> ConfigResult<Self> {
        Self::load_file(&dir.join(CONFIG_FILENAME))
    }

    /// Load configuration from an explicit file path
    ///
    /// A missing file yields defaults. Environment overrides are applied.
    pub fn load_file(path: &Path) -> ConfigResult<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| ConfigError::IoError(format!("Failed to read config: {}", e)))?;
            Self::parse(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> ConfigResult<Self> {
        toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("Failed to parse config: {}", e)))
    }

    /// Convert configuration to TOML string
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to serialize config: {}", e))
        })
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var(ENV_EXPORT_DIR) {
            self.paths.export_dir = dir;
        }

        if let Ok(dir) = std::env::var(ENV_OUTPUT_DIR) {
            self.paths.output_dir = dir;
        }

        if let Ok(strict) = std::env::var(ENV_STRICT) {
            self.verify.strict = matches!(
                strict.trim().to_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }
    }

    /// Credential type mapping with this configuration's overrides
    pub fn credential_type_map(&self) -> CredentialTypeMap {
        CredentialTypeMap::with_overrides(self.credential_types.clone())
    }
}

/// Generate a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# cac-migrate configuration

[paths]
# Directory holding the 2.4 JSON export (organizations.json, credentials.json, ...)
export_dir = "./_export_24"

# Directory receiving controller_*.yml files
output_dir = "./_cac_25"

[verify]
# Treat missing collection files as failures
strict = false

[credential_types]
# Map additional source credential type labels to 2.5 display names
# "Custom SSH" = "Machine"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = MigrationConfig::new();
        assert_eq!(config.paths.export_dir, DEFAULT_EXPORT_DIR);
        assert_eq!(config.paths.output_dir, DEFAULT_OUTPUT_DIR);
        assert!(!config.verify.strict);
        assert!(config.credential_types.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[paths]
output_dir = "build/cac"

[verify]
strict = true

[credential_types]
"Custom SSH" = "Machine"
"#;
        let config = MigrationConfig::parse(toml).unwrap();
        assert_eq!(config.paths.export_dir, DEFAULT_EXPORT_DIR);
        assert_eq!(config.paths.output_dir, "build/cac");
        assert!(config.verify.strict);
        assert_eq!(config.credential_type_map().map("Custom SSH"), "Machine");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            MigrationConfig::parse("[verify]\nstrict = \"sometimes\"\n"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[paths]\nexport_dir = \"exports\"\n",
        )
        .unwrap();

        let config = MigrationConfig::load(dir.path()).unwrap();
        if std::env::var(ENV_EXPORT_DIR).is_err() {
            assert_eq!(config.paths.export_dir, "exports");
        }
    }

    #[test]
    fn test_to_toml_round_trips() {
        let mut config = MigrationConfig::new();
        config.verify.strict = true;
        let toml = config.to_toml().unwrap();
        assert_eq!(MigrationConfig::parse(&toml).unwrap(), config);
    }

    #[test]
    fn test_sample_config_is_valid() {
        let result = MigrationConfig::parse(sample_config());
        assert!(result.is_ok(), "Sample config should be valid TOML");
    }
}
