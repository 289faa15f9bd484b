mod common;

use serde_json::{json, Value};
use std::process::{Command, Output};

const FIXTURE: &str = r#"
REQUEST_METHOD: GET
HTTPS: "on"
argc: "3"
PHP_AUTH_PW: hunter2
"#;

fn run_serverenv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_serverenv"))
        .args(args)
        .env_remove("SERVERENV_FIXTURE")
        .env_remove("RUST_LOG")
        .env_remove("SERVERENV_LOG_LEVEL")
        .output()
        .expect("run serverenv")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_cli_dump_fixture() {
    let fixture = common::temp_fixture(FIXTURE, "yaml");
    let path = fixture.path().to_str().unwrap();

    let output = run_serverenv(&["dump", "--fixture", path]);
    let dump = stdout_json(&output);

    assert_eq!(dump["REQUEST_METHOD"], json!("GET"));
    assert_eq!(dump["HTTPS"], json!(true));
    assert_eq!(dump["argc"], json!(3));
    assert_eq!(dump["REMOTE_ADDR"], Value::Null);
    assert_eq!(dump["PHP_AUTH_PW"], json!("<REDACTED>"));
}

#[test]
fn test_cli_dump_fixture_from_env_var() {
    let fixture = common::temp_fixture(FIXTURE, "yaml");

    let output = Command::new(env!("CARGO_BIN_EXE_serverenv"))
        .args(["dump", "--present-only", "--redact", "none"])
        .env("SERVERENV_FIXTURE", fixture.path())
        .output()
        .expect("run serverenv");
    let dump = stdout_json(&output);

    assert_eq!(dump.as_object().unwrap().len(), 4);
    assert_eq!(dump["PHP_AUTH_PW"], json!("hunter2"));
}

#[test]
fn test_cli_get_coerces() {
    let fixture = common::temp_fixture(FIXTURE, "yaml");
    let path = fixture.path().to_str().unwrap();

    let output = run_serverenv(&["get", "argc", "--fixture", path, "--as", "int"]);
    assert_eq!(stdout_json(&output), json!(3));

    let output = run_serverenv(&["get", "REMOTE_ADDR", "--fixture", path, "--as", "text"]);
    assert_eq!(stdout_json(&output), Value::Null);

    let output = run_serverenv(&["get", "argc", "--fixture", path]);
    assert_eq!(stdout_json(&output), json!("3"));
}

#[test]
fn test_cli_reads_process_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_serverenv"))
        .args(["get", "REQUEST_METHOD", "--as", "text"])
        .env_remove("SERVERENV_FIXTURE")
        .env("REQUEST_METHOD", "OPTIONS")
        .output()
        .expect("run serverenv");
    assert_eq!(stdout_json(&output), json!("OPTIONS"));
}

#[test]
fn test_cli_fields_lists_catalogue() {
    let output = run_serverenv(&["fields"]);
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text.lines().count(), serverenv::Field::ALL.len());
    assert!(text.contains("REQUEST_TIME_FLOAT"));
}

#[test]
fn test_cli_missing_fixture_fails() {
    let output = run_serverenv(&["dump", "--fixture", "/definitely/not/here.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("/definitely/not/here.json"));
}

#[test]
fn test_cli_verbose_logs_fixture_load_to_stderr() {
    let fixture = common::temp_fixture(FIXTURE, "yaml");
    let path = fixture.path().to_str().unwrap();

    let quiet = run_serverenv(&["get", "argc", "--fixture", path]);
    assert_eq!(stdout_json(&quiet), json!("3"));
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("DEBUG"));

    let verbose = run_serverenv(&["--verbose", "get", "argc", "--fixture", path]);
    assert_eq!(stdout_json(&verbose), json!("3"));
    assert!(String::from_utf8_lossy(&verbose.stderr).contains("DEBUG"));
}
