//! CLI integration tests.
//!
//! Tests the rcjson CLI commands by invoking the binary as a subprocess.

use std::io::Write;
use std::process::{Command, Stdio};

fn rcjson() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rcjson"))
}

fn run_with_stdin(args: &[&str], input: &str) -> (i32, String, String) {
    let mut child = rcjson()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn rcjson: {}", e));

    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(input.as_bytes()).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

// ============================================================================
// Format Command Tests
// ============================================================================

#[test]
fn cli_format_standard() {
    let (code, stdout, _stderr) = run_with_stdin(&["format"], r#"{ "b": [1, 2], "a": 1 }"#);
    assert_eq!(code, 0, "Expected success exit code");
    assert_eq!(stdout.trim_end(), r#"{"a":1,"b":[1,2]}"#);
}

#[test]
fn cli_format_classic() {
    let (code, stdout, _stderr) =
        run_with_stdin(&["format", "--style", "classic"], r#"{"a":1,"b":[1,2,3]}"#);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), "{a:1, b:[1, 2, 3]}");
}

#[test]
fn cli_format_reports_parse_error() {
    let (code, stdout, stderr) = run_with_stdin(&["format"], r#"{"a":}"#);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("unexpected token at byte 5"), "stderr: {}", stderr);
}

#[test]
fn cli_format_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[true, null, \"x\"]").unwrap();

    let output = rcjson()
        .arg("format")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        r#"[true,null,"x"]"#
    );
}

#[test]
fn cli_missing_file_exits_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = rcjson()
        .arg("format")
        .arg(dir.path().join("absent.json"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read input"));
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn cli_check_valid_document() {
    let (code, stdout, _stderr) = run_with_stdin(&["check"], "[1, 2, 3]");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), r#"{"ok":{"kind":"array"}}"#);
}

#[test]
fn cli_check_invalid_document() {
    let (code, stdout, _stderr) = run_with_stdin(&["check"], r#"{"a":}"#);
    assert_eq!(code, 1);
    assert_eq!(
        stdout.trim_end(),
        r#"{"err":{"code":4,"name":"UnexpectedToken","offset":5}}"#
    );
}

#[test]
fn cli_check_max_depth() {
    let (code, stdout, _stderr) = run_with_stdin(&["check", "--max-depth", "1"], "[[1]]");
    assert_eq!(code, 1);
    assert_eq!(
        stdout.trim_end(),
        r#"{"err":{"code":5,"name":"DepthExceeded","offset":1}}"#
    );
}

#[test]
fn cli_check_trailing_data() {
    let (code, stdout, _stderr) = run_with_stdin(&["check"], "{} {}");
    assert_eq!(code, 1);
    assert!(stdout.contains("TrailingData"));

    let (code, stdout, _stderr) = run_with_stdin(&["check", "--allow-trailing"], "{} {}");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), r#"{"ok":{"kind":"object"}}"#);
}

// ============================================================================
// Version Command Tests
// ============================================================================

#[test]
fn cli_version() {
    let output = rcjson().arg("version").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("rcjson v"));
}
