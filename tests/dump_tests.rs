mod common;

use serde_json::{json, Value};
use serverenv::dump::{collect, render, DumpFormat, DumpOptions, RedactionLevel, REDACTED};
use serverenv::{Field, ServerEnvironment};

fn options(format: DumpFormat, redaction: RedactionLevel, present_only: bool) -> DumpOptions {
    DumpOptions {
        format,
        redaction,
        present_only,
    }
}

#[test]
fn test_json_dump_masks_credentials_by_default() {
    let env = ServerEnvironment::new(common::sample_request());
    let out = render(&env, &DumpOptions::default()).unwrap();
    let parsed: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(parsed["REQUEST_METHOD"], json!("GET"));
    assert_eq!(parsed["REQUEST_TIME"], json!(1_700_000_000));
    assert_eq!(parsed["HTTPS"], json!(true));
    assert_eq!(parsed["argv"], json!(["q=1"]));
    assert_eq!(parsed["PHP_AUTH_PW"], json!(REDACTED));
    assert_eq!(parsed["PHP_AUTH_DIGEST"], json!(REDACTED));
    assert_eq!(parsed["REMOTE_ADDR"], json!("203.0.113.7"));
    assert_eq!(parsed.as_object().unwrap().len(), Field::ALL.len());
    assert!(!out.contains("s3cret"));
}

#[test]
fn test_full_redaction_masks_personal_fields() {
    let env = ServerEnvironment::new(common::sample_request());
    let entries = collect(&env, &options(DumpFormat::Json, RedactionLevel::Full, false));

    for (field, value) in entries {
        let masked = value == serverenv::FieldValue::Text(Some(REDACTED.to_string()));
        let sensitive = field.sensitivity() != serverenv::Sensitivity::Public;
        assert_eq!(masked, sensitive, "{field}");
    }
}

#[test]
fn test_no_redaction_keeps_secrets() {
    let env = ServerEnvironment::new(common::sample_request());
    let out = render(&env, &options(DumpFormat::Json, RedactionLevel::None, false)).unwrap();
    assert!(out.contains("s3cret"));
}

#[test]
fn test_absent_fields_dump_as_null() {
    let env = ServerEnvironment::new([("REQUEST_METHOD", "GET")]);
    let out = render(&env, &DumpOptions::default()).unwrap();
    let parsed: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(parsed["REMOTE_ADDR"], Value::Null);
    assert_eq!(parsed["PHP_AUTH_PW"], Value::Null);
    assert_eq!(parsed["argv"], json!([]));
    assert_eq!(parsed["HTTPS"], json!(false));
}

#[test]
fn test_present_only_skips_missing_keys() {
    let env = ServerEnvironment::new([("REQUEST_METHOD", json!("GET")), ("argc", json!("3"))]);
    let entries = collect(&env, &options(DumpFormat::Json, RedactionLevel::None, true));
    let keys: Vec<_> = entries.iter().map(|(f, _)| f.key()).collect();
    assert_eq!(keys, vec!["argc", "REQUEST_METHOD"]);
}

#[test]
fn test_output_follows_catalogue_order() {
    let env = ServerEnvironment::new(common::sample_request());
    let out = render(&env, &options(DumpFormat::Json, RedactionLevel::None, false)).unwrap();

    let positions: Vec<usize> = Field::ALL
        .iter()
        .map(|f| out.find(&format!("\"{}\":", f.key())).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_text_dump() {
    let env = ServerEnvironment::new([("REQUEST_METHOD", json!("GET")), ("argc", json!(2))]);
    let out = render(&env, &options(DumpFormat::Text, RedactionLevel::Credentials, false)).unwrap();

    assert_eq!(out.lines().count(), Field::ALL.len());
    let method_line = out
        .lines()
        .find(|l| l.starts_with("REQUEST_METHOD "))
        .unwrap();
    assert!(method_line.ends_with("= GET"));
    let remote_line = out.lines().find(|l| l.starts_with("REMOTE_ADDR ")).unwrap();
    assert!(remote_line.ends_with("= (absent)"));
}

#[test]
fn test_yaml_dump_parses_back() {
    let env = ServerEnvironment::new(common::sample_request());
    let out = render(&env, &options(DumpFormat::Yaml, RedactionLevel::Credentials, true)).unwrap();
    let parsed: Value = serde_yaml::from_str(&out).unwrap();

    assert_eq!(parsed["SERVER_NAME"], json!("example.com"));
    assert_eq!(parsed["REQUEST_TIME_FLOAT"], json!(1_700_000_000.25));
    assert_eq!(parsed["PHP_AUTH_PW"], json!(REDACTED));
}
