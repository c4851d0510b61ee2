//! Tests for the transform command

#[cfg(feature = "cli")]
mod transform_command_tests {
    use super::super::{path_arg, write_config, write_export};
    use cac_migrate::cli::CliError;
    use cac_migrate::cli::commands::transform::{TransformArgs, handle_transform};
    use cac_migrate::migrate::MigrationError;
    use cac_migrate::models::RecordKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_transform_writes_every_collection() {
        let temp = tempdir().unwrap();
        let args = TransformArgs {
            export_dir: Some(write_export(temp.path())),
            output_dir: Some(path_arg(temp.path(), "out")),
            kinds: vec![],
            config: Some(write_config(temp.path(), "")),
        };

        assert_eq!(handle_transform(&args).unwrap(), 0);
        for kind in RecordKind::ALL {
            assert!(
                temp.path().join("out").join(kind.output_file_name()).is_file(),
                "{} not written",
                kind
            );
        }
    }

    #[test]
    fn test_transform_missing_export_dir_exits_2() {
        let temp = tempdir().unwrap();
        let args = TransformArgs {
            export_dir: Some(path_arg(temp.path(), "typo_export_dir")),
            output_dir: Some(path_arg(temp.path(), "out")),
            kinds: vec![],
            config: Some(write_config(temp.path(), "")),
        };

        assert_eq!(handle_transform(&args).unwrap(), 2);
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_transform_uses_config_type_overrides() {
        let temp = tempdir().unwrap();
        let config = write_config(
            temp.path(),
            "[credential_types]\n\"Custom SSH\" = \"Machine\"\n",
        );
        let args = TransformArgs {
            export_dir: Some(write_export(temp.path())),
            output_dir: Some(path_arg(temp.path(), "out")),
            kinds: vec![RecordKind::Credential],
            config: Some(config),
        };

        assert_eq!(handle_transform(&args).unwrap(), 0);
        let yaml =
            fs::read_to_string(temp.path().join("out/controller_credentials.yml")).unwrap();
        assert!(yaml.contains("credential_type: Machine"));
        assert!(!yaml.contains("password"));
        assert!(!temp.path().join("out/controller_projects.yml").exists());
    }

    #[test]
    fn test_transform_bad_record_is_an_error() {
        let temp = tempdir().unwrap();
        let export = write_export(temp.path());
        fs::write(
            temp.path().join("export/organizations.json"),
            r#"[{"description": "no name"}]"#,
        )
        .unwrap();
        let args = TransformArgs {
            export_dir: Some(export),
            output_dir: Some(path_arg(temp.path(), "out")),
            kinds: vec![],
            config: Some(write_config(temp.path(), "")),
        };

        let err = handle_transform(&args).unwrap_err();
        assert!(matches!(
            err,
            CliError::MigrationError(MigrationError::Normalize {
                kind: RecordKind::Organization,
                index: 0,
                ..
            })
        ));
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_transform_missing_config_file() {
        let temp = tempdir().unwrap();
        let args = TransformArgs {
            config: Some(temp.path().join("absent.toml")),
            ..Default::default()
        };

        assert!(matches!(
            handle_transform(&args),
            Err(CliError::ConfigNotFound(_))
        ));
    }
}
