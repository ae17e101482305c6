//! CLI smoke tests for the usergraph-server binary.
//!
//! These verify configuration validation, help output, and the basic
//! command surface without starting the HTTP server.

use std::process::{Command, Stdio};

/// Helper to run the usergraph-server binary with given arguments
fn run_server_cmd(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_usergraph-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to execute usergraph-server")
}

#[test]
fn help_lists_commands() {
    let output = run_server_cmd(&["--help"]);

    assert!(output.status.success(), "help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("usergraph-server"));
    assert!(stdout.contains("Usage:") || stdout.contains("USAGE:"));
    assert!(stdout.contains("run"), "should list the 'run' subcommand");
    assert!(stdout.contains("check"), "should list the 'check' subcommand");
    assert!(stdout.contains("--config"), "should mention config option");
}

#[test]
fn version_prints_number() {
    let output = run_server_cmd(&["--version"]);

    assert!(output.status.success(), "version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("usergraph-server"));
    assert!(stdout.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn check_accepts_default_configuration() {
    let output = run_server_cmd(&["check"]);

    assert!(output.status.success(), "check with defaults should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("configuration OK"));
}

#[test]
fn check_accepts_valid_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("usergraph.yaml");
    std::fs::write(
        &path,
        "server:\n  host: 127.0.0.1\n  port: 9000\ndatabase:\n  url: sqlite://users.db\n",
    )
    .expect("write config");

    let output = run_server_cmd(&["--config", path.to_str().expect("utf-8 path"), "check"]);

    assert!(output.status.success(), "check should accept a valid file");
}

#[test]
fn check_rejects_malformed_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "server: [not, a, map]\n").expect("write config");

    let output = run_server_cmd(&["--config", path.to_str().expect("utf-8 path"), "check"]);

    assert!(!output.status.success(), "check should reject a bad file");
}

#[test]
fn print_config_emits_yaml() {
    let output = run_server_cmd(&["--print-config"]);

    assert!(output.status.success(), "print-config should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("server:"));
    assert!(stdout.contains("port:"));
    assert!(stdout.contains("database:"));
}

#[test]
fn invalid_subcommand_fails() {
    let output = run_server_cmd(&["frobnicate"]);

    assert!(!output.status.success(), "unknown subcommand should fail");
}
