//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run with RECALL_HOME pointed at a
//! temp directory, so each test runs against an isolated store.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against the given home directory.
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "recall-cli", "--"])
        .args(args)
        .env("RECALL_HOME", home)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed ({args:?}): {stderr}");
    stdout
}

#[test]
fn test_item_add_and_list() {
    let home = tempfile::tempdir().unwrap();

    let stdout = run_cli_success(home.path(), &["item", "add", "hola"]);
    assert!(stdout.contains("item added: hola"));

    let stdout = run_cli_success(home.path(), &["item", "list"]);
    assert!(stdout.contains("hola"));
    assert!(stdout.contains("interval=0d"));

    let stdout = run_cli_success(home.path(), &["item", "list", "--json"]);
    let states: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(states.as_array().unwrap().len(), 1);
    assert_eq!(states[0]["item_id"], "hola");
}

#[test]
fn test_duplicate_item_fails() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["item", "add", "gato"]);

    let (_, stderr, code) = run_cli(home.path(), &["item", "add", "gato"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("already tracked"));
}

#[test]
fn test_review_rate_advances_state() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["item", "add", "perro"]);

    let stdout = run_cli_success(home.path(), &["review", "rate", "perro", "2"]);
    assert!(stdout.contains("next review in 1 day(s)"));

    // The reviewed item is no longer due
    let stdout = run_cli_success(home.path(), &["session", "due"]);
    assert_eq!(stdout.trim(), "0");
}

#[test]
fn test_review_rate_strict_rejects_out_of_range() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["item", "add", "sol"]);

    // Clamping path accepts and degrades
    run_cli_success(home.path(), &["review", "rate", "sol", "9"]);

    let (_, stderr, code) = run_cli(home.path(), &["review", "rate", "sol", "9", "--strict"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid quality rating 9"));
}

#[test]
fn test_review_preview_shows_all_ratings() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["item", "add", "luna"]);

    let stdout = run_cli_success(home.path(), &["review", "preview", "luna"]);
    for label in ["again", "hard", "good", "easy"] {
        assert!(stdout.contains(label), "missing {label} in: {stdout}");
    }
}

#[test]
fn test_session_start_orders_and_limits() {
    let home = tempfile::tempdir().unwrap();
    for id in ["a", "b", "c"] {
        run_cli_success(home.path(), &["item", "add", id]);
    }

    let stdout = run_cli_success(home.path(), &["session", "start", "--limit", "2", "--json"]);
    let session: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(session.len(), 2);

    let stdout = run_cli_success(home.path(), &["session", "start", "--limit", "0"]);
    assert!(stdout.contains("nothing due"));
}

#[test]
fn test_config_get_set_reset() {
    let home = tempfile::tempdir().unwrap();

    let stdout = run_cli_success(home.path(), &["config", "get", "default_session_size"]);
    assert_eq!(stdout.trim(), "20");

    run_cli_success(home.path(), &["config", "set", "default_session_size", "5"]);
    let stdout = run_cli_success(home.path(), &["config", "get", "default_session_size"]);
    assert_eq!(stdout.trim(), "5");

    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "ease_floor", "0"]);
    assert_ne!(code, 0);
    assert!(!stderr.is_empty());

    run_cli_success(home.path(), &["config", "reset"]);
    let stdout = run_cli_success(home.path(), &["config", "get", "default_session_size"]);
    assert_eq!(stdout.trim(), "20");
}

#[test]
fn test_simulate_run_is_deterministic() {
    let home = tempfile::tempdir().unwrap();
    let args = ["simulate", "run", "--days", "20", "--seed", "7", "--json"];

    let first = run_cli_success(home.path(), &args);
    let second = run_cli_success(home.path(), &args);
    assert_eq!(first, second);

    let report: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert_eq!(report["days"], 20);
    assert!(report["reviews"].as_u64().unwrap() > 0);
}
