//! Integration tests for the `unbabel` binary entry point.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

#[test]
fn version_flag_prints_version() {
    let mut command = cargo_bin_cmd!("unbabel");
    command.arg("--version");
    command
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn debug_json_logs_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.json");
    fs::write(&input, r#"{"name": "unbabel", "tags": ["a", "b"]}"#).unwrap();

    let mut command = cargo_bin_cmd!("unbabel");
    command.args(["--log-level", "debug", "--log-format", "json", "json"]);
    command.arg(&input);

    let output = command.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert!(!records.is_empty());
    assert!(records.iter().all(|r| r["level"] == "DEBUG"));
    assert!(records.iter().any(|r| r["msg"] == "parsed json input"));
}

#[test]
fn json_from_stdin_without_logging_is_silent() {
    let mut command = cargo_bin_cmd!("unbabel");
    command.arg("json").write_stdin("[1, 2, 3]");
    command.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn invalid_log_level_exits_with_failure() {
    let mut command = cargo_bin_cmd!("unbabel");
    command.args(["--log-level", "bogus", "json"]);
    command
        .assert()
        .failure()
        .stderr(contains("invalid log level: bogus"));
}

#[test]
fn unimplemented_direction_fails() {
    let mut command = cargo_bin_cmd!("unbabel");
    command.arg("sql").write_stdin("");
    command.assert().failure().stderr(contains("unimplemented"));
}

#[test]
fn log_exporter_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("run.log");

    let mut command = cargo_bin_cmd!("unbabel");
    command.args(["--log-level", "debug", "--log-format", "text", "--log-exporter"]);
    command.arg(&log_file);
    command.arg("json").write_stdin("{}");
    command.assert().success().stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("msg=\"reading input\""));
    assert!(content.contains("shape=object(0)"));
}
