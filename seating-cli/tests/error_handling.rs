//! Exit codes and error messages for fatal failures.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_missing_input_file() {
    let env = TestEnv::new();

    env.command()
        .args(["run", "missing.txt"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_malformed_restaurant_count() {
    let env = TestEnv::new();
    let batch = env.write_file("batch.txt", "lots\n");

    env.command()
        .arg("run")
        .arg(&batch)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid number of restaurants"));
}

#[test]
fn test_truncated_initial_block() {
    let env = TestEnv::new();
    let batch = env.write_file("batch.txt", "1\nR1 555-0100 7 1 2 6\n10:00-14:00\n");

    env.command()
        .arg("run")
        .arg(&batch)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("truncated restaurant block"));
}

#[test]
fn test_invalid_start_day() {
    let env = TestEnv::new();
    let batch = env.write_batch("");

    env.command()
        .args(["run", "--start-day", "0"])
        .arg(&batch)
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_invalid_config_file() {
    let env = TestEnv::new();
    let batch = env.write_batch("");
    env.write_file("seating.yaml", "start_day: 1\nunknown_key: true\n");

    env.command()
        .arg("run")
        .arg(&batch)
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_explicit_config() {
    let env = TestEnv::new();
    let batch = env.write_batch("");

    env.command()
        .args(["--config", "nope.yaml", "run"])
        .arg(&batch)
        .assert()
        .failure()
        .code(7);
}

#[test]
fn test_unknown_format_rejected_by_clap() {
    let env = TestEnv::new();

    env.command()
        .args(["--format", "xml", "run"])
        .assert()
        .failure()
        .code(2);
}
