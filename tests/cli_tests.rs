// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI integration tests.
//!
//! These tests run the actual h5series binary and verify its behavior.

use std::{
    path::PathBuf,
    process::{Command, Output},
};

/// Get the path to the built h5series binary
fn h5series_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    // The test binary is in target/debug/deps/
    // The h5series binary is in target/debug/
    path.pop(); // deps
    path.pop(); // debug or release
    path.push("h5series");
    path
}

/// Run h5series with arguments
fn run(args: &[&str]) -> Output {
    let bin = h5series_bin();
    Command::new(&bin)
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to run {:?}", bin))
}

/// Run h5series and assert success
fn run_ok(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "Command failed: {:?}\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run h5series and assert failure
fn run_err(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        !output.status.success(),
        "Command should have failed but succeeded: {:?}",
        args
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Write a minimal snapshot fixture into a fresh scratch directory.
fn write_fixture(tag: &str) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("h5series-cli-{tag}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let mut raw = Vec::new();
    for (t, v) in [(1.0f64, 10i32), (2.0, 20)] {
        raw.extend_from_slice(&t.to_le_bytes());
        raw.extend_from_slice(&v.to_le_bytes());
    }
    let doc = format!(
        r#"{{
            "groups": [{{
                "name": "Foo1",
                "datasets": [{{
                    "name": "chan1",
                    "layout": {{
                        "members": [
                            {{"name": "time", "class": "float", "byte_size": 8, "byte_offset": 0, "signed": true}},
                            {{"name": "value", "class": "integer", "byte_size": 4, "byte_offset": 8, "signed": true}}
                        ],
                        "element_size": 12
                    }},
                    "dataspace": {{"dims": [2]}},
                    "data": "{}"
                }}]
            }}]
        }}"#,
        hex::encode(raw)
    );
    let input = dir.join("fixture.json");
    std::fs::write(&input, doc).unwrap();
    (dir, input)
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let output = run_ok(&["--help"]);
    assert!(output.contains("time-ordered series"));
    assert!(output.contains("convert"));
    assert!(output.contains("inspect"));
}

#[test]
fn test_cli_version() {
    let output = run_ok(&["--version"]);
    assert!(output.contains("h5series"));
}

#[test]
fn test_convert_requires_infile() {
    let stderr = run_err(&["convert"]);
    assert!(stderr.contains("--infile") || stderr.contains("-i"));
}

// ============================================================================
// Convert Tests
// ============================================================================

#[test]
fn test_convert_writes_output_tree() {
    let (dir, input) = write_fixture("convert");
    let out = dir.join("out");

    let stdout = run_ok(&[
        "convert",
        "-i",
        input.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "-b",
        "0",
    ]);
    assert!(stdout.contains("Conversion complete!"));
    assert!(stdout.contains("Samples:   2"));

    let dest = out.join("fixture.json").join("Foo1");
    assert_eq!(
        std::fs::read_to_string(dest.join("1.000/chan1.i32")).unwrap(),
        "10"
    );
    assert_eq!(
        std::fs::read_to_string(dest.join("2.000/chan1.i32")).unwrap(),
        "20"
    );
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_convert_missing_input_fails() {
    let stderr = run_err(&["convert", "-i", "/no/such/file.json"]);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("does not exist"));
}

#[test]
fn test_convert_rejects_bad_flush() {
    let (dir, input) = write_fixture("badflush");
    let out = dir.join("out");

    let stderr = run_err(&[
        "convert",
        "-i",
        input.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "-f",
        "0",
    ]);
    assert!(stderr.contains("flush_interval"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_convert_echoes_base_time() {
    let (dir, input) = write_fixture("basetime");
    let out = dir.join("out");

    let stdout = run_ok(&[
        "convert",
        "-i",
        input.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    assert!(stdout.contains("1483246800"));
    assert!(stdout.contains("2017-01-01"));
    let _ = std::fs::remove_dir_all(&dir);
}

// ============================================================================
// Inspect Tests
// ============================================================================

#[test]
fn test_inspect_lists_groups_and_schemas() {
    let (dir, input) = write_fixture("inspect");

    let stdout = run_ok(&["inspect", input.to_str().unwrap()]);
    assert!(stdout.contains("File: fixture.json"));
    assert!(stdout.contains("Group: Foo1"));
    assert!(stdout.contains("chan1"));
    assert!(stdout.contains("2 records"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_inspect_missing_file_fails() {
    let stderr = run_err(&["inspect", "/no/such/file.json"]);
    assert!(stderr.contains("Error:"));
}
