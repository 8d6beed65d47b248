//! Integration tests for glance CLI output behavior
//!
//! stdout must always carry exactly one JSON array and nothing else,
//! and the exit status must be zero even when the window server is
//! unreachable. Logs default to quiet; -v/--verbose enables them.

use std::process::Command;

/// Execute 'glance' and verify it exits successfully
fn run_glance(args: &[&str]) -> std::process::Output {
    let output = Command::new(env!("CARGO_BIN_EXE_glance"))
        .args(args)
        .output()
        .expect("Failed to execute 'glance'");

    assert!(
        output.status.success(),
        "glance {:?} failed with exit code {:?}. stderr: {}",
        args,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    output
}

// =============================================================================
// Output Contract Tests
// =============================================================================

/// stdout is always a single valid JSON array
#[test]
fn test_stdout_is_a_json_array() {
    let output = run_glance(&[]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("stdout should parse as JSON");

    assert!(value.is_array(), "expected a JSON array, got: {stdout}");
}

/// Every element carries the full output schema
#[test]
fn test_entries_match_output_schema() {
    let output = run_glance(&[]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

    for entry in value.as_array().unwrap() {
        assert!(entry["windowId"].is_u64());
        assert!(entry["appName"].is_string());
        assert!(entry["windowTitle"].is_string());
        assert!(entry["bounds"]["X"].is_number());
        assert!(entry["bounds"]["Y"].is_number());
        assert!(entry["bounds"]["Width"].is_number());
        assert!(entry["bounds"]["Height"].is_number());
        assert!(entry["isOnScreen"].is_boolean());
        assert!(entry["layer"].is_i64());
        assert!(entry["isImportant"].is_boolean());
        assert!(entry["area"].is_number());
    }
}

/// Important entries sort before unimportant ones
#[test]
fn test_output_is_ordered_important_first() {
    let output = run_glance(&[]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

    let mut seen_unimportant = false;
    for entry in value.as_array().unwrap() {
        let important = entry["isImportant"].as_bool().unwrap();
        if !important {
            seen_unimportant = true;
        }
        assert!(
            !(important && seen_unimportant),
            "important entry found after an unimportant one"
        );
    }
}

/// Repeated runs of the binary both succeed with valid JSON
#[test]
fn test_repeated_runs_succeed() {
    run_glance(&[]);
    run_glance(&[]);
}

/// Hosts without a window server still get exactly [] and exit 0
#[cfg(not(target_os = "macos"))]
#[test]
fn test_unavailable_window_server_prints_empty_array() {
    let output = run_glance(&[]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "[]");
}

// =============================================================================
// Default Mode (Quiet) Behavioral Tests
// =============================================================================

/// Verify that default mode (no flags) suppresses INFO-level logs
#[test]
fn test_default_mode_suppresses_info_logs() {
    let output = run_glance(&[]);

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should suppress INFO logs, but stderr contains: {}",
        stderr
    );
    assert!(
        !stderr.contains(r#""level":"DEBUG""#),
        "Default mode should suppress DEBUG logs, but stderr contains: {}",
        stderr
    );
}

/// Verify that stdout contains only the JSON payload (no JSON logs)
#[test]
fn test_stdout_is_clean_of_logs() {
    let output = run_glance(&[]);

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
}

// =============================================================================
// Verbose Mode Behavioral Tests
// =============================================================================

/// Verify verbose mode (-v) emits INFO logs on stderr
#[test]
fn test_verbose_flag_emits_info_logs() {
    let output = run_glance(&["-v"]);

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, but stderr is: {}",
        stderr
    );
    assert!(
        stderr.contains("cli.snapshot_started"),
        "Verbose mode should log pipeline events, but stderr is: {}",
        stderr
    );
}

/// Verify verbose mode works with --verbose long form
#[test]
fn test_verbose_flag_long_form_emits_logs() {
    let output = run_glance(&["--verbose"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose long form should emit INFO logs, but stderr is: {}",
        stderr
    );
}

/// Verbose mode must not leak logs into the JSON payload
#[test]
fn test_verbose_stdout_still_parses_as_json() {
    let output = run_glance(&["-v"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("stdout should parse as JSON");
    assert!(value.is_array());
}
