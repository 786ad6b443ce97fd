use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".login-screen").join("config.json")
}

const BINARY_NAME: &str = "login-screen";

fn command(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()); // simulate different $HOME
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Headless login with valid input reaches the home screen.
fn login_with_valid_credentials_navigates_home() {
    let tmp = temp_home_dir();
    command(&tmp)
        .args(["login", "--username", "alice", "--password", "secret1"])
        .args(["--delay-ms", "10"])
        .assert()
        .success()
        .stdout(contains("Navigate to home screen"))
        .stdout(contains("Signed in"));
}

#[test]
/// Validation errors fail the command before any request is made.
fn login_with_short_password_fails_validation() {
    let tmp = temp_home_dir();
    command(&tmp)
        .args(["login", "--username", "alice", "--password", "abc"])
        .assert()
        .failure()
        .stderr(contains("Password must be at least 6 characters"));
}

#[test]
fn login_with_blank_username_fails_validation() {
    let tmp = temp_home_dir();
    command(&tmp)
        .args(["login", "--username", "  ", "--password", "secret1"])
        .assert()
        .failure()
        .stderr(contains("Username cannot be empty"));
}

#[test]
/// Configure writes the config file and reset-config deletes it.
fn configure_then_reset_config() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    command(&tmp)
        .args(["configure", "--delay-ms", "5", "--background", "false"])
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"simulated_delay_ms\": 5"));
    assert!(saved.contains("\"with_background_color\": false"));

    command(&tmp)
        .arg("reset-config")
        .assert()
        .success()
        .stdout(contains("Resetting configuration"));
    assert!(!config_path.exists());
}

#[test]
/// A broken config file is reported instead of silently ignored.
fn login_with_invalid_config_fails() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "not json").unwrap();

    command(&tmp)
        .args(["login", "--username", "alice", "--password", "secret1"])
        .assert()
        .failure()
        .stderr(contains("Failed to load config"));
}

#[test]
/// RUST_LOG turns on the stderr logger for headless commands.
fn login_logs_request_lifecycle_with_rust_log() {
    let tmp = temp_home_dir();
    command(&tmp)
        .env("RUST_LOG", "debug")
        .args(["login", "--username", "alice", "--password", "secret1"])
        .args(["--delay-ms", "10"])
        .assert()
        .success()
        .stderr(contains("Login request #1 started for alice"))
        .stderr(contains("Login request #1 accepted"));
}

#[test]
fn login_logger_is_quiet_by_default() {
    let tmp = temp_home_dir();
    command(&tmp)
        .env_remove("RUST_LOG")
        .args(["login", "--username", "alice", "--password", "secret1"])
        .args(["--delay-ms", "10"])
        .assert()
        .success()
        .stderr(contains("Login request").not());
}
