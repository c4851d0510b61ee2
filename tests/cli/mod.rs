//! CLI tests module

#[cfg(feature = "cli")]
pub mod transform_tests;
#[cfg(feature = "cli")]
pub mod verify_tests;

use std::fs;
use std::path::{Path, PathBuf};

/// Absolute path of `name` under `dir`, as the string form the CLI takes
pub fn path_arg(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}

/// Write a config file into `dir` and return its path
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("cac-migrate.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Minimal export with one project and one credential
pub fn write_export(dir: &Path) -> String {
    let export = dir.join("export");
    fs::create_dir_all(&export).unwrap();
    fs::write(
        export.join("projects.json"),
        r#"[{"name": "Web", "scm_url": "https://git.example.com/web.git"}]"#,
    )
    .unwrap();
    fs::write(
        export.join("credentials.json"),
        r#"[{"name": "Deploy Key", "credential_type": "Custom SSH", "inputs": {"password": "x"}}]"#,
    )
    .unwrap();
    export.to_string_lossy().into_owned()
}
