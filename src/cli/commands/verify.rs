//! Verify command implementation

use super::load_config;
use crate::cli::error::CliError;
use crate::models::RecordKind;
use crate::storage::FileSystemStorageBackend;
use crate::verify::{EXIT_FAILED, VerificationReport, Verifier, VerifyError};
use std::path::PathBuf;

/// Arguments for the verify command
#[derive(Debug, Clone, Default)]
pub struct VerifyArgs {
    /// Overrides `paths.output_dir`
    pub path: Option<String>,
    /// Strict mode; also enabled by `verify.strict` in the config
    pub strict: bool,
    /// Kinds whose files are expected; empty means all
    pub kinds: Vec<RecordKind>,
    pub config: Option<PathBuf>,
}

/// Itemized findings, errors first.
///
/// Empty when the report is clean.
pub fn format_report(report: &VerificationReport) -> String {
    let mut out = String::new();
    if !report.errors.is_empty() {
        out.push_str("ERRORS:\n");
        for error in &report.errors {
            out.push_str(&format!("  - {}\n", error));
        }
    }
    if !report.warnings.is_empty() {
        out.push_str("WARNINGS:\n");
        for warning in &report.warnings {
            out.push_str(&format!("  - {}\n", warning));
        }
    }
    out
}

/// Handle the verify command, returning the process exit status
pub fn handle_verify(args: &VerifyArgs) -> Result<i32, CliError> {
    let config = load_config(args.config.as_deref())?;
    let strict = args.strict || config.verify.strict;
    let dir = args
        .path
        .clone()
        .unwrap_or_else(|| config.paths.output_dir.clone());

    let verifier =
        Verifier::new(FileSystemStorageBackend::current_dir()).with_kinds(&args.kinds);
    let report = match verifier.verify(&dir) {
        Ok(report) => report,
        Err(VerifyError::PathNotFound(path)) => {
            eprintln!("ERROR: Path not found: {}", path);
            return Ok(EXIT_FAILED);
        }
        Err(e) => return Err(e.into()),
    };

    if report.is_clean() {
        println!("OK: YAML verification passed.");
    } else {
        eprint!("{}", format_report(&report));
    }

    Ok(report.outcome(strict).exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::{VerificationError, VerificationWarning};

    #[test]
    fn formats_errors_before_warnings() {
        let report = VerificationReport {
            warnings: vec![VerificationWarning::MissingFile {
                path: "out/controller_workflows.yml".to_string(),
            }],
            errors: vec![VerificationError::MissingRequiredField {
                path: "out/controller_projects.yml".to_string(),
                key: "controller_projects",
                index: 0,
                field: "name",
            }],
        };

        assert_eq!(
            format_report(&report),
            "ERRORS:\n  - out/controller_projects.yml: [controller_projects][0] missing required field 'name'.\nWARNINGS:\n  - Missing expected file: out/controller_workflows.yml\n"
        );
    }

    #[test]
    fn clean_report_formats_to_nothing() {
        assert_eq!(format_report(&VerificationReport::default()), "");
    }
}
