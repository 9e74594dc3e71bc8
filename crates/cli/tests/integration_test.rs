//! End-to-end tests for the `balance_check` binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

fn balance_check() -> Command {
    Command::new(env!("CARGO_BIN_EXE_balance_check"))
}

fn temp_input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn shows_help() {
    balance_check()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("balance_check"))
        .stdout(predicate::str::contains("--capacity"));
}

#[test]
fn properly_nested_input_succeeds() {
    balance_check()
        .args(["-e", "([{}])"])
        .assert()
        .success()
        .stdout("Everything nested properly.\n");
}

#[test]
fn wrong_closer_fails_with_expected_and_actual() {
    balance_check()
        .args(["-e", "(]"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Wanted '('. Got ']'."));
}

#[test]
fn lone_closer_fails() {
    balance_check()
        .args(["-e", ")"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Got ')' with nothing open."));
}

#[test]
fn leftover_opener_fails_from_stdin() {
    balance_check()
        .args(["--capacity", "3"])
        .write_stdin("(((\n")
        .assert()
        .code(1)
        .stdout("Improper nesting: '(' remaining.\n");
}

#[test]
fn exceeding_capacity_is_reported_not_crashed() {
    balance_check()
        .args(["--capacity", "3"])
        .write_stdin("((((\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Stack full: can't push! (capacity 3)"));
}

#[test]
fn scanning_stops_at_the_first_newline() {
    balance_check()
        .write_stdin("{[]}\n)))")
        .assert()
        .success();
}

#[test]
fn whole_input_scans_past_newlines() {
    balance_check()
        .arg("--whole-input")
        .write_stdin("{[]}\n)))")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Got ')' with nothing open."));
}

#[test]
fn no_prompt_when_stdin_is_piped() {
    balance_check()
        .write_stdin("()\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter parentheses").not());
}

#[test]
fn several_inputs_are_labelled_and_any_failure_fails() {
    let good = temp_input("fn main() { let v = [1, 2]; }\n");
    let bad = temp_input("if (a[0) {}\n");
    balance_check()
        .arg(good.path())
        .arg(bad.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!(
            "{}: Everything nested properly.",
            good.path().display()
        )))
        .stdout(predicate::str::contains(format!(
            "{}: Wanted '['. Got ')'.",
            bad.path().display()
        )));
}

#[test]
fn missing_file_is_a_usage_error() {
    balance_check()
        .arg("does/not/exist.txt")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does/not/exist.txt"));
}

#[test]
fn json_output_describes_each_input() {
    let assert = balance_check()
        .args(["--format", "json", "-e", "()", "-e", "(x]"])
        .assert()
        .code(1);
    let json: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("parse JSON output");

    let reports = json.as_array().expect("array of reports");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["result"]["kind"], "valid");
    assert_eq!(reports[1]["result"]["kind"], "mismatch");
    assert_eq!(reports[1]["result"]["expected"], "(");
    assert_eq!(reports[1]["result"]["found"], "]");
    assert_eq!(reports[1]["offset"], 2);
}

#[test]
fn jsonl_prints_one_line_per_input() {
    let assert = balance_check()
        .args(["--format", "jsonl", "-e", "[]", "-e", "{"])
        .assert()
        .code(1);
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    let last: Value = serde_json::from_str(lines[1]).expect("parse JSONL line");
    assert_eq!(last["result"]["kind"], "unclosed_opener");
    assert_eq!(last["result"]["opener"], "{");
    assert_eq!(last["remaining"], 1);
}

#[test]
fn config_file_sets_defaults_and_flags_win() {
    let config = temp_input(r#"{ "capacity": 2, "format": "jsonl" }"#);

    balance_check()
        .arg("--config")
        .arg(config.path())
        .args(["-e", "((("])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"kind\":\"overflow\""));

    balance_check()
        .arg("--config")
        .arg(config.path())
        .args(["--capacity", "5", "--format", "text", "-e", "((()))"])
        .assert()
        .success()
        .stdout("Everything nested properly.\n");
}

#[test]
fn malformed_config_file_is_a_usage_error() {
    let config = temp_input("{ capacity: ");
    balance_check()
        .arg("--config")
        .arg(config.path())
        .args(["-e", "()"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn quiet_reports_through_exit_status_only() {
    balance_check()
        .args(["--quiet", "-e", "(]"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn verbose_logs_go_to_stderr() {
    balance_check()
        .args(["-v", "-e", "()"])
        .assert()
        .success()
        .stdout("Everything nested properly.\n")
        .stderr(predicate::str::contains("[info] checking"));
}
