//! CLI integration tests for the casc-source binary.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;

use common::{write_temp_yaml, JENKINS_YAML};

/// Build an `assert_cmd::Command` pointing at the `casc-source` binary,
/// with its working directory set to `dir` and no ambient credentials.
fn casc_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("casc-source");
    cmd.current_dir(dir)
        .env_remove("CASC_CONFIG_USER")
        .env_remove("CASC_CONFIG_PASSWORD")
        .env_remove("CASC_CONFIG_TOKEN")
        .env_remove("CASC_SOURCE_CONFIG");
    cmd
}

#[test]
fn test_read_path_prints_content() {
    let (dir, path) = write_temp_yaml("jenkins.yaml", JENKINS_YAML);

    casc_cmd(dir.path())
        .args(["read", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(JENKINS_YAML);
}

#[test]
fn test_read_stdin() {
    let dir = tempfile::tempdir().unwrap();

    casc_cmd(dir.path())
        .args(["read", "-"])
        .write_stdin("from: stdin\n")
        .assert()
        .success()
        .stdout("from: stdin\n");
}

#[test]
fn test_read_json_output() {
    let (dir, path) = write_temp_yaml("jenkins.yaml", "key: value\n");

    let output = casc_cmd(dir.path())
        .args(["--json", "read", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "path");
    assert_eq!(json["content"], "key: value\n");
}

#[test]
fn test_read_file_url() {
    let (dir, path) = write_temp_yaml("jenkins.yaml", "key: local\n");
    let url = reqwest::Url::from_file_path(&path).unwrap();

    let output = casc_cmd(dir.path())
        .args(["--json", "read", url.as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "url");
    assert_eq!(json["content"], "key: local\n");
}

#[test]
fn test_read_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    casc_cmd(dir.path())
        .args(["read", "missing.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.yaml"));
}

#[test]
fn test_read_url_with_token_from_env() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/jenkins.yaml")
        .match_header("authorization", "Bearer tok123")
        .with_status(200)
        .with_body("a: 1\n")
        .create();
    let dir = tempfile::tempdir().unwrap();

    casc_cmd(dir.path())
        .env("CASC_CONFIG_TOKEN", "tok123")
        .args(["read", &format!("{}/jenkins.yaml", server.url())])
        .assert()
        .success()
        .stdout("a: 1\n");
    mock.assert();
}

#[test]
fn test_settings_file_renames_credential_keys() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/jenkins.yaml")
        .match_header("authorization", "Bearer custom")
        .with_status(200)
        .with_body("a: 1\n")
        .create();
    let (dir, settings) = write_temp_yaml("settings.yaml", "credentials:\n  token: MY_TOKEN\n");

    casc_cmd(dir.path())
        .env("MY_TOKEN", "custom")
        .args([
            "--config",
            settings.to_str().unwrap(),
            "read",
            &format!("{}/jenkins.yaml", server.url()),
        ])
        .assert()
        .success();
    mock.assert();
}

#[test]
fn test_describe() {
    let dir = tempfile::tempdir().unwrap();

    casc_cmd(dir.path())
        .args(["describe", "https://config.example.com/jenkins.yaml"])
        .assert()
        .success()
        .stdout("https://config.example.com/jenkins.yaml (url)\n");
}

#[test]
fn test_invalid_settings_fail() {
    let (dir, settings) = write_temp_yaml("settings.yaml", "http:\n  timeout_secs: 0\n");

    casc_cmd(dir.path())
        .args(["--config", settings.to_str().unwrap(), "describe", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_secs"));
}
