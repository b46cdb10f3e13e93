//! Integration tests for the `validate` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_validate_reports_counts() {
    let env = TestEnv::new();
    let batch = env.write_batch("REQUEST X1 U1 R1 3 11:00 4\nNEXT_DAY\n");

    env.command()
        .arg("validate")
        .arg(&batch)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 restaurant(s), 2 command(s)"));
}

#[test]
fn test_validate_counts_invalid_lines() {
    let env = TestEnv::new();
    let batch = env.write_batch("NEXT_DAY\nDANCE\nCANCEL U1\n");

    env.command()
        .arg("validate")
        .arg(&batch)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 command(s)"))
        .stdout(predicate::str::contains("2 invalid command line(s)"));
}

#[test]
fn test_validate_json() {
    let env = TestEnv::new();
    let batch = env.write_batch("NEXT_DAY\nDANCE\n");

    let output = env
        .command()
        .args(["--format", "json", "validate"])
        .arg(&batch)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["restaurants"], 1);
    assert_eq!(report["commands"], 2);
    assert_eq!(report["invalid_lines"], serde_json::json!([11]));
}

#[test]
fn test_validate_does_not_execute() {
    let env = TestEnv::new();
    let batch = env.write_batch("REQUEST X1 U1 R1 3 11:00 4\n");

    env.command()
        .arg("validate")
        .arg(&batch)
        .assert()
        .success()
        .stdout(predicate::str::contains("Received").not());
}

#[test]
fn test_validate_malformed_header() {
    let env = TestEnv::new();
    let batch = env.write_file("bad.txt", "two\n");

    env.command()
        .arg("validate")
        .arg(&batch)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 1"));
}
