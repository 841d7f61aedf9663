//! End-to-end tests for the `voicehealth-validate` binary

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_voicehealth-validate"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("VOICEHEALTH_CONFIG")
        .env_remove("VOICEHEALTH_LOG_FORMAT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

const VALID: &str =
    r#"{"symptoms":["wheezing","cough"],"severity":7,"potential_triggers":["pollen"]}"#;

#[test]
fn valid_report_prints_one() {
    let output = run(&["--no-color"], VALID);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn out_of_range_severity_prints_zero() {
    let output = run(
        &["--no-color"],
        r#"{"symptoms":[],"severity":12,"potential_triggers":[]}"#,
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "0\n");
    assert_eq!(stderr(&output), "Severity must be between 0 and 10\n");
}

#[test]
fn malformed_json_prints_zero() {
    let output = run(&["--no-color"], "{ invalid json }");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "0\n");
    assert_eq!(stderr(&output), "Malformed JSON\n");
}

#[test]
fn empty_stdin_is_a_usage_error() {
    let output = run(&["--no-color"], "");
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("No input provided on stdin"));
}

#[test]
fn newline_only_stdin_is_malformed_json() {
    let output = run(&["--no-color"], "\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "0\n");
    assert_eq!(stderr(&output), "Malformed JSON\n");
}

#[test]
fn lines_mode_reports_each_line() {
    let input = format!("{}\n{{\"symptoms\":[]}}\n", VALID);
    let output = run(&["--no-color", "--lines"], &input);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "1\n0\n");
    assert_eq!(
        stderr(&output),
        "line 2: Missing or invalid 'severity' (must be number)\n"
    );
}

#[test]
fn json_output_carries_diagnostic() {
    let output = run(&["--no-color", "-o", "json"], "[]");
    assert_eq!(output.status.code(), Some(1));

    let record: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(record["valid"], false);
    assert_eq!(record["code"], "root_not_object");
    assert_eq!(record["error"], "Root must be a JSON object");
}

#[test]
fn oversize_input_is_rejected() {
    let output = run(&["--no-color", "--max-bytes", "8"], VALID);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Input exceeds the limit of 8 bytes"));
}

#[test]
fn print_schema_emits_json_schema() {
    let output = run(&["--print-schema"], "");
    assert_eq!(output.status.code(), Some(0));

    let schema: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(schema["type"], "object");
    assert_eq!(
        schema["required"],
        serde_json::json!(["symptoms", "severity", "potential_triggers"])
    );
}
