//! Integration tests for `stackctl config`.
//!
//! Each test points `STACKCTL_CONFIG` at its own temporary file.

#![allow(clippy::expect_used)]

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn stackctl(config: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stackctl"));
    cmd.env("NO_COLOR", "1").env("STACKCTL_CONFIG", config);
    cmd
}

#[test]
fn test_config_show_defaults_without_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.yaml");
    stackctl(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docker-compose.yml"))
        .stdout(predicate::str::contains("sudo"));
    assert!(!config.exists(), "show must not create the file");
}

#[test]
fn test_config_show_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.yaml");
    let output = stackctl(&config)
        .args(["config", "show", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["config"]["stack"]["compose_file"], "docker-compose.yml");
    assert_eq!(value["config"]["privilege"]["helper"], "sudo");
}

#[test]
fn test_config_set_persists_value() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.yaml");
    stackctl(&config)
        .args(["config", "set", "privilege.helper", "doas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set privilege.helper = doas"));

    let stored = std::fs::read_to_string(&config).expect("config written");
    assert!(stored.contains("doas"));

    stackctl(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("doas"));
}

#[cfg(unix)]
#[test]
fn test_config_set_writes_owner_only_file() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("nested").join("config.yaml");
    stackctl(&config)
        .args(["config", "set", "stack.compose_file", "deploy/compose.yml"])
        .assert()
        .success();

    let mode = std::fs::metadata(&config).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.yaml");
    stackctl(&config)
        .args(["config", "set", "stack.name", "assistant"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown setting: stack.name"));
    assert!(!config.exists());
}

#[test]
fn test_config_set_invalid_helper_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    stackctl(&dir.path().join("config.yaml"))
        .args(["config", "set", "privilege.helper", "su"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid value for privilege.helper"));
}

#[test]
fn test_config_set_rejects_descriptor_outside_root() {
    let dir = tempfile::tempdir().expect("tempdir");
    stackctl(&dir.path().join("config.yaml"))
        .args(["config", "set", "stack.compose_file", "/etc/compose.yml"])
        .assert()
        .code(1);
}

#[test]
fn test_config_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.yaml");
    std::fs::write(&config, "stack: [not, a, map").expect("write");
    stackctl(&config)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}
