//! Integration tests for the namecheck binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn namecheck() -> Command {
    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version_flag() {
    namecheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_valid_values_exit_zero() {
    namecheck()
        .args(["check", "block-document-name", "my-block", "other-block"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-block"))
        .stdout(predicate::str::contains("other-block"));
}

#[test]
fn test_rejected_value_exits_two_with_message() {
    namecheck()
        .args(["check", "variable-name", "my_var", "My Var"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "Variable name must only contain lowercase letters, numbers, and dashes or underscores.",
        ))
        .stderr(predicate::str::contains("1 of 2 value(s) rejected as variable-name"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_asset_key_space_is_cited() {
    namecheck()
        .args(["check", "asset-key", "s3://bucket/with space"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Asset key cannot contain ' '"));
}

#[test]
fn test_field_label_override() {
    namecheck()
        .args(["check", "uri-like", "bucket/x", "--field", "Dataset key"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Dataset key must be a valid URI"));
}

#[test]
fn test_values_read_from_stdin() {
    namecheck()
        .args(["check", "artifact-key", "-"])
        .write_stdin("daily-report\nweekly-report\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("weekly-report"));
}

#[test]
fn test_empty_stdin_is_invalid_input() {
    namecheck()
        .args(["check", "artifact-key"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no values to check"));
}

#[test]
fn test_json_output_is_parseable() {
    let output = namecheck()
        .args([
            "--output-format",
            "json",
            "check",
            "uri-like",
            "s3://bucket/x",
            "S3://bucket/x",
        ])
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let results = parsed.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["valid"], true);
    assert_eq!(results[1]["valid"], false);
    assert_eq!(results[1]["kind"], "uri-like");
}

#[test]
fn test_fail_fast_from_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("namecheck.toml");
    fs::write(&config_path, "[check]\nfail_fast = true\nfield = \"Slug\"\n").unwrap();

    namecheck()
        .arg("--config")
        .arg(&config_path)
        .args(["check", "block-type-slug", "Bad", "Worse"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Slug must only contain"))
        .stderr(predicate::str::contains("1 of 1 value(s) rejected"));
}

#[test]
fn test_environment_overrides_config() {
    namecheck()
        .env("NAMECHECK__CHECK__FIELD", "Env label")
        .args(["check", "artifact-key", "Bad"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Env label must only contain"));
}

#[test]
fn test_missing_explicit_config_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    namecheck()
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .args(["kinds"])
        .assert()
        .code(4);
}

#[test]
fn test_kinds_lists_every_kind() {
    namecheck()
        .args(["kinds", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("block-document-name"))
        .stdout(predicate::str::contains("non-emptyish-name"))
        .stdout(predicate::str::contains("valid-asset-key"));
}

#[test]
fn test_config_init_writes_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("nested").join("config.toml");

    namecheck()
        .args(["config", "init"])
        .arg(&config_path)
        .assert()
        .success();

    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[check]"));

    namecheck()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "get", "check.fail_fast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("check.fail_fast = false"));
}

#[test]
fn test_completions_generate() {
    namecheck()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("namecheck"));
}

#[test]
fn test_no_color_env_accepts_any_non_empty_value() {
    namecheck()
        .env("NO_COLOR", "1")
        .args(["--output-format", "human", "check", "artifact-key", "ok"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{2713} ok"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_no_color_env_falsey_value_is_allowed() {
    namecheck()
        .env("NO_COLOR", "0")
        .args(["check", "artifact-key", "ok"])
        .assert()
        .success();
}

#[test]
fn test_blank_stdin_line_is_checked() {
    namecheck()
        .args(["check", "name", "-"])
        .write_stdin("ok\n\nfine\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Name cannot be an empty string"))
        .stderr(predicate::str::contains("1 of 3 value(s) rejected as name"));
}

#[test]
fn test_blank_stdin_line_is_a_valid_artifact_key() {
    namecheck()
        .args(["check", "artifact-key", "-"])
        .write_stdin("daily-report\n\n")
        .assert()
        .success();
}

#[test]
fn test_rejection_is_not_logged_as_warning_by_default() {
    namecheck()
        .args(["check", "artifact-key", "Bad"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("WARN").not());
}

#[test]
fn test_debug_verbosity_logs_each_rejection() {
    namecheck()
        .args(["-vv", "check", "artifact-key", "Bad", "ok"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("value rejected"));
}
