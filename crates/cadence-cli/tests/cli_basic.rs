//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Only
//! commands that fail fast before reaching the network are exercised here.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "cadence-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help_lists_commands() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    for command in ["automation", "suggest", "share", "config", "completions"] {
        assert!(stdout.contains(command), "help should mention {command}");
    }
}

#[test]
fn test_completions_generate() {
    let (stdout, _, code) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("cadence"));
}

#[test]
fn test_create_rejects_off_catalog_time() {
    let (_, stderr, code) = run_cli(&[
        "automation", "create", "do the thing", "--every", "day", "--at", "9:07 AM",
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("not a selectable time"));
}

#[test]
fn test_create_weekly_needs_weekday() {
    let (_, stderr, code) = run_cli(&[
        "automation", "create", "do the thing", "--every", "week", "--at", "9:00 AM",
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("--on"));
}
