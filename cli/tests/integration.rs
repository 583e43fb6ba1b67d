//! End-to-end integration tests for the gormgen CLI

use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Get the gormgen CLI binary
fn gormgen_cli() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("gormgen"));
    cmd.env("NO_COLOR", "1");
    cmd
}

const SCHEMA: &str = r#"{
    "tables": [
        {
            "name": "user_info",
            "columns": [
                { "name": "id", "type": "BIGINT", "length": 20, "nullable": false,
                  "primaryKey": true, "autoIncrement": true },
                { "name": "email", "type": "VARCHAR", "length": 255, "nullable": false },
                { "name": "created_at", "type": "DATETIME", "nullable": false }
            ],
            "indexes": [
                { "name": "uq_email", "type": "unique", "columns": ["email"] }
            ]
        },
        {
            "name": "tags",
            "columns": [
                { "name": "name", "type": "VARCHAR", "length": 64 },
                { "name": "data", "type": "BLOB" }
            ]
        }
    ]
}"#;

/// Temp project with a schema and a config pointing at it
fn project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("schema.json"), SCHEMA).unwrap();
    std::fs::write(temp.path().join("gormgen.toml"), config).unwrap();
    temp
}

fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path).unwrap()
}

mod init {
    use super::*;

    #[test]
    fn init_creates_config_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("gormgen.toml");

        gormgen_cli()
            .current_dir(temp.path())
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Created gormgen.toml"));

        let content = read(&config_path);
        assert!(content.contains("schema = \"schema.json\""));
        assert!(content.contains("package = \"models\""));
    }

    #[test]
    fn init_fails_if_config_exists() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("gormgen.toml"), "package = \"models\"").unwrap();

        gormgen_cli()
            .current_dir(temp.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn init_then_check() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("schema.json"), SCHEMA).unwrap();

        gormgen_cli().current_dir(temp.path()).arg("init").assert().success();
        gormgen_cli()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("2 table(s) selected"));
    }
}

mod generate {
    use super::*;

    #[test]
    fn writes_one_file_per_table() {
        let temp = project("");

        gormgen_cli()
            .current_dir(temp.path())
            .arg("generate")
            .assert()
            .success()
            .stdout(predicate::str::contains("userInfo.go"))
            .stdout(predicate::str::contains("Generated 2 file(s)"));

        let user = read(temp.path().join("models/userInfo.go"));
        assert_eq!(
            user,
            "package models

import (
\t\"time\"
)

type UserInfo struct {
\tId        int64     `gorm:\"column:id;pk autoincr BIGINT(20)\"`
\tEmail     string    `gorm:\"column:email;not null unique VARCHAR(255)\"`
\tCreatedAt time.Time `gorm:\"column:created_at;not null created DATETIME\"`
}
"
        );

        let tags = read(temp.path().join("models/tags.go"));
        assert!(tags.starts_with("package models\n\ntype Tags struct {\n"));
        assert!(tags.contains("[]byte"));
        assert!(!tags.contains("import"));
    }

    #[test]
    fn single_file_and_overrides() {
        let temp = project("");

        gormgen_cli()
            .current_dir(temp.path())
            .args(["generate", "--single-file", "--package", "entity", "--out", "gen"])
            .assert()
            .success();

        let code = read(temp.path().join("gen/models.go"));
        assert!(code.starts_with("package entity\n\nimport (\n\t\"time\"\n)\n\n"));
        assert!(code.contains("type UserInfo struct {"));
        assert!(code.contains("}\n\ntype Tags struct {"));
        assert!(!temp.path().join("gen/tags.go").exists());
    }

    #[test]
    fn json_tags_from_config() {
        let temp = project("json = true\njsonIgnore = [\"data\"]\ntables = \"tags\"\n");

        gormgen_cli()
            .current_dir(temp.path())
            .arg("generate")
            .assert()
            .success();

        let tags = read(temp.path().join("models/tags.go"));
        assert!(tags.contains("`gorm:\"column:name;VARCHAR(64)\" json:\"name\"`"));
        assert!(tags.contains("`gorm:\"column:data;BLOB\" json:\"-\"`"));
        assert!(!temp.path().join("models/userInfo.go").exists());
    }

    #[test]
    fn custom_config_path() {
        let temp = project("");
        std::fs::rename(
            temp.path().join("gormgen.toml"),
            temp.path().join("custom.toml"),
        )
        .unwrap();

        gormgen_cli()
            .current_dir(temp.path())
            .args(["--config", "custom.toml", "generate"])
            .assert()
            .success();

        assert!(temp.path().join("models/tags.go").exists());
    }

    #[test]
    fn no_matching_tables_fails() {
        let temp = project("tables = [\"missing*\"]\n");

        gormgen_cli()
            .current_dir(temp.path())
            .arg("generate")
            .assert()
            .failure()
            .stderr(predicate::str::contains("No tables matched filter: missing*"));
    }

    #[test]
    fn invalid_package_override_fails() {
        let temp = project("");

        gormgen_cli()
            .current_dir(temp.path())
            .args(["generate", "--package", "my-models"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid Go package name"));
    }

    #[test]
    fn missing_config_fails() {
        let temp = TempDir::new().unwrap();

        gormgen_cli()
            .current_dir(temp.path())
            .arg("generate")
            .assert()
            .failure()
            .stderr(predicate::str::contains("config not found"));
    }
}

mod check {
    use super::*;

    #[test]
    fn reports_tables_and_imports() {
        let temp = project("");

        gormgen_cli()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("user_info"))
            .stdout(predicate::str::contains("Imports: time"))
            .stdout(predicate::str::contains("Configuration OK."));
    }

    #[test]
    fn unknown_index_column_fails() {
        let temp = project("");
        std::fs::write(
            temp.path().join("schema.json"),
            r#"{ "tables": [{ "name": "t",
                "columns": [{ "name": "a", "type": "INT" }],
                "indexes": [{ "name": "idx", "columns": ["b"] }] }] }"#,
        )
        .unwrap();

        gormgen_cli()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("unknown column 'b'"));
    }

    #[test]
    fn malformed_config_fails() {
        let temp = project("package = ");

        gormgen_cli()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse"));
    }
}
