//! Tests for the verify command

#[cfg(feature = "cli")]
mod verify_command_tests {
    use super::super::{path_arg, write_config, write_export};
    use cac_migrate::cli::commands::transform::{TransformArgs, handle_transform};
    use cac_migrate::cli::commands::verify::{VerifyArgs, handle_verify};
    use cac_migrate::models::RecordKind;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn transform(dir: &Path, kinds: Vec<RecordKind>) -> String {
        let output = path_arg(dir, "out");
        let args = TransformArgs {
            export_dir: Some(write_export(dir)),
            output_dir: Some(output.clone()),
            kinds,
            config: Some(write_config(dir, "")),
        };
        assert_eq!(handle_transform(&args).unwrap(), 0);
        output
    }

    fn verify_args(dir: &Path, path: String, strict: bool) -> VerifyArgs {
        VerifyArgs {
            path: Some(path),
            strict,
            kinds: vec![],
            config: Some(write_config(dir, "")),
        }
    }

    #[test]
    fn test_verify_missing_path_exits_2() {
        let temp = tempdir().unwrap();
        let args = verify_args(temp.path(), path_arg(temp.path(), "nowhere"), false);
        assert_eq!(handle_verify(&args).unwrap(), 2);
    }

    #[test]
    fn test_verify_transform_output_exits_0() {
        let temp = tempdir().unwrap();
        let output = transform(temp.path(), vec![]);

        assert_eq!(handle_verify(&verify_args(temp.path(), output.clone(), false)).unwrap(), 0);
        assert_eq!(handle_verify(&verify_args(temp.path(), output, true)).unwrap(), 0);
    }

    #[test]
    fn test_verify_warnings_exit_by_strictness() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("empty")).unwrap();
        let empty = path_arg(temp.path(), "empty");

        assert_eq!(handle_verify(&verify_args(temp.path(), empty.clone(), false)).unwrap(), 0);
        assert_eq!(handle_verify(&verify_args(temp.path(), empty.clone(), true)).unwrap(), 2);

        let from_config = VerifyArgs {
            path: Some(empty),
            strict: false,
            kinds: vec![],
            config: Some(write_config(temp.path(), "[verify]\nstrict = true\n")),
        };
        assert_eq!(handle_verify(&from_config).unwrap(), 2);
    }

    #[test]
    fn test_verify_errors_exit_2() {
        let temp = tempdir().unwrap();
        let output = transform(temp.path(), vec![]);
        fs::write(
            temp.path().join("out/controller_projects.yml"),
            "controller_projects:\n- scm_type: git\n",
        )
        .unwrap();

        assert_eq!(handle_verify(&verify_args(temp.path(), output, false)).unwrap(), 2);
    }

    #[test]
    fn test_verify_kind_selection_matches_transform() {
        let temp = tempdir().unwrap();
        let output = transform(temp.path(), vec![RecordKind::Project]);

        let all_kinds = verify_args(temp.path(), output.clone(), true);
        assert_eq!(handle_verify(&all_kinds).unwrap(), 2);

        let selected = VerifyArgs {
            kinds: vec![RecordKind::Project],
            ..verify_args(temp.path(), output, true)
        };
        assert_eq!(handle_verify(&selected).unwrap(), 0);
    }
}
