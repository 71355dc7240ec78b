//! CLI integration tests
//!
//! These tests run the built `snippets` binary against a temporary database
//! and check its stdout, stderr and exit status.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn db_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("store.db")
}

fn run(temp_dir: &TempDir, args: &[&str]) -> Output {
    let db = db_path(temp_dir);
    Command::new(env!("CARGO_BIN_EXE_snippets"))
        .current_dir(temp_dir.path())
        .arg("--db")
        .arg(&db)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn run_ok(temp_dir: &TempDir, args: &[&str]) -> String {
    let output = run(temp_dir, args);
    assert!(
        output.status.success(),
        "CLI command {:?} should succeed. Stderr: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

fn read_to_string(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

#[test]
fn test_put_then_get() {
    let temp_dir = TempDir::new().unwrap();

    let stdout = run_ok(&temp_dir, &["put", "greet", "hello world"]);
    assert_eq!(
        stdout.trim_end(),
        "Stored \"hello world\" as \"greet\" (hidden: false)"
    );

    let stdout = run_ok(&temp_dir, &["get", "greet"]);
    assert_eq!(stdout.trim_end(), "Retrieved snippet: \"hello world\"");
}

#[test]
fn test_get_missing_prints_not_found_and_exits_zero() {
    let temp_dir = TempDir::new().unwrap();

    let stdout = run_ok(&temp_dir, &["get", "nope"]);
    assert_eq!(stdout.trim_end(), "404: Snippet not found: \"nope\"");
}

#[test]
fn test_put_overwrites_existing_name() {
    let temp_dir = TempDir::new().unwrap();

    run_ok(&temp_dir, &["put", "a", "x"]);
    run_ok(&temp_dir, &["put", "a", "y"]);

    let stdout = run_ok(&temp_dir, &["get", "a"]);
    assert_eq!(stdout.trim_end(), "Retrieved snippet: \"y\"");
    assert_eq!(run_ok(&temp_dir, &["catalog"]), "a\n");
}

#[test]
fn test_catalog_sorted_and_excludes_hidden() {
    let temp_dir = TempDir::new().unwrap();

    // Empty store prints nothing
    assert_eq!(run_ok(&temp_dir, &["catalog"]), "");

    run_ok(&temp_dir, &["put", "b", ".."]);
    run_ok(&temp_dir, &["put", "a", ".."]);
    let stdout = run_ok(&temp_dir, &["put", "c", "..", "--hide"]);
    assert!(stdout.contains("(hidden: true)"));

    assert_eq!(run_ok(&temp_dir, &["catalog"]), "a\nb\n");
}

#[test]
fn test_search_prints_visible_matches() {
    let temp_dir = TempDir::new().unwrap();

    run_ok(&temp_dir, &["put", "x", "hello world"]);
    run_ok(&temp_dir, &["put", "y", "hello there"]);
    run_ok(&temp_dir, &["hide", "y", "True"]);

    let stdout = run_ok(&temp_dir, &["search", "hello"]);
    assert_eq!(stdout, "x: \"hello world\"\n");

    assert_eq!(run_ok(&temp_dir, &["search", "Hello"]), "");
}

#[test]
fn test_hide_flag_is_case_insensitive() {
    let temp_dir = TempDir::new().unwrap();
    run_ok(&temp_dir, &["put", "a", "x"]);

    let stdout = run_ok(&temp_dir, &["hide", "a", "TRUE"]);
    assert_eq!(stdout.trim_end(), "Set hidden=True for \"a\"");
    assert_eq!(run_ok(&temp_dir, &["catalog"]), "");

    let stdout = run_ok(&temp_dir, &["hide", "a", "false"]);
    assert_eq!(stdout.trim_end(), "Set hidden=False for \"a\"");
    assert_eq!(run_ok(&temp_dir, &["catalog"]), "a\n");
}

#[test]
fn test_hide_unknown_name_is_a_noop() {
    let temp_dir = TempDir::new().unwrap();

    let stdout = run_ok(&temp_dir, &["hide", "ghost", "True"]);
    assert_eq!(stdout.trim_end(), "Set hidden=True for \"ghost\"");

    let stdout = run_ok(&temp_dir, &["get", "ghost"]);
    assert!(stdout.starts_with("404:"));
}

#[test]
fn test_hide_rejects_unknown_flag() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["hide", "a", "maybe"]);
    assert!(!output.status.success());
}

#[test]
fn test_invalid_name_reports_error_and_exits_one() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["put", "   ", "x"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr was: {}", stderr);
    assert!(stderr.contains("ERR_INVALID_ARGUMENT"), "stderr was: {}", stderr);
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let stdout = run_ok(&temp_dir, &["--json", "put", "a", "x"]);
    let stored: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stored["name"], "a");
    assert_eq!(stored["content"], "x");
    assert_eq!(stored["hidden"], false);

    let stdout = run_ok(&temp_dir, &["--json", "get", "a"]);
    let found: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(found["status"], "found");
    assert_eq!(found["content"], "x");

    let stdout = run_ok(&temp_dir, &["get", "missing", "--json"]);
    let missing: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(missing["status"], "not_found");
    assert_eq!(missing["name"], "missing");

    let stdout = run_ok(&temp_dir, &["--json", "catalog"]);
    let names: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(names, vec!["a"]);

    let stdout = run_ok(&temp_dir, &["--json", "search", ""]);
    let hits: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(hits[0]["name"], "a");
}

#[test]
fn test_default_db_path_is_created_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_snippets"))
        .current_dir(temp_dir.path())
        .args(["put", "a", "x"])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    assert!(temp_dir.path().join(".snippets").join("store.db").exists());
}

#[test]
fn test_log_file_records_operations_without_content() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("snippets.log");

    run_ok(
        &temp_dir,
        &[
            "--log-file",
            log_path.to_str().unwrap(),
            "put",
            "logged",
            "classified-body-42",
        ],
    );

    let log = read_to_string(&log_path);
    assert!(log.contains("put"), "log was: {}", log);
    assert!(log.contains("logged"));
    assert!(!log.contains("classified-body-42"));
}
