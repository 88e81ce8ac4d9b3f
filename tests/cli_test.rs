// tests/cli_test.rs
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_installer-version"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run installer-version")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// parse
// ============================================================================

#[test]
fn test_parse_valid_inputs_succeed() {
    let output = run(&["parse", "v1.2.3", "v1.2.3-r5"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("v1.2.3 (semantic 1.2.3)"), "got: {}", out);
    assert!(
        out.contains("v1.2.3-r5 (semantic 1.2.3, specifier \"r5\")"),
        "got: {}",
        out
    );
}

#[test]
fn test_parse_non_version_exits_with_error() {
    let output = run(&["parse", "v1.0.0", "not-a-version"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("'not-a-version' is not a version"));
}

// ============================================================================
// compare
// ============================================================================

#[test]
fn test_compare_prints_relation() {
    let output = run(&["compare", "v1.0.0", "v1.0.1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "v1.0.0 < v1.0.1");
}

#[test]
fn test_compare_unparsable_side_exits_with_error() {
    let output = run(&["compare", "v1.0.0", "latest"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Cannot compare"));
}

// ============================================================================
// latest
// ============================================================================

#[test]
fn test_latest_stdout_holds_only_the_result() {
    let output = run(&[
        "latest",
        "--config",
        "tests/fixtures/config_no_prereleases.toml",
        "v1.0.0",
        "v1.1.0-r12",
        "v1.2.0-beta",
        "nightly",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "v1.1.0-r12\n");
}

#[test]
fn test_latest_nothing_eligible_exits_with_error() {
    let output = run(&["latest", "--stable", "v1.0.0-beta", "v1.0.0-r3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("No eligible version found"));
}

#[test]
fn test_latest_bad_config_exits_with_error() {
    let output = run(&[
        "latest",
        "--config",
        "tests/fixtures/does_not_exist.toml",
        "v1.0.0",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error loading config"));
}
