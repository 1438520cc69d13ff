//! Integration tests for the sql-glance binary.

use std::io::Write;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("sql-glance");
    cmd.env_remove("SQL_GLANCE_INDENT")
        .env_remove("SQL_GLANCE_UPPERCASE")
        .env_remove("SQL_GLANCE_MAX_LINE_LENGTH")
        .env_remove("SQL_GLANCE_LINES_BETWEEN_CLAUSES");
    cmd
}

fn sql_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_format_file() {
    let file = sql_file("select id, name from users where id = 1");

    cmd()
        .args(["format", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("SELECT id, name"))
        .stdout(predicate::str::contains("FROM users"))
        .stdout(predicate::str::contains("WHERE id = 1"));
}

#[test]
fn test_format_stdin() {
    cmd()
        .args(["format", "-", "--lines-between-clauses", "0"])
        .write_stdin("select a from t")
        .assert()
        .success()
        .stdout("SELECT a\nFROM t\n");
}

#[test]
fn test_format_no_uppercase() {
    cmd()
        .args(["format", "--no-uppercase", "--lines-between-clauses", "0"])
        .write_stdin("select a from t")
        .assert()
        .success()
        .stdout("select a\nfrom t\n");
}

#[test]
fn test_format_env_override() {
    cmd()
        .arg("format")
        .env("SQL_GLANCE_UPPERCASE", "false")
        .env("SQL_GLANCE_LINES_BETWEEN_CLAUSES", "0")
        .write_stdin("select a from t")
        .assert()
        .success()
        .stdout("select a\nfrom t\n");
}

#[test]
fn test_format_multiple_statements() {
    cmd()
        .args(["format", "--lines-between-clauses", "0"])
        .write_stdin("select a from t; delete from u;")
        .assert()
        .success()
        .stdout("SELECT a\nFROM t;\n\nDELETE\nFROM u\n");
}

#[test]
fn test_analyze_text() {
    let file = sql_file("SELECT u.id FROM users u LEFT JOIN orders o ON u.id = o.uid LIMIT 5");

    cmd()
        .args(["analyze", file.path().to_str().unwrap(), "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Statement #1 (SELECT):"))
        .stdout(predicate::str::contains("LEFT orders"))
        .stdout(predicate::str::contains("LIMIT: 5"));
}

#[test]
fn test_analyze_json() {
    cmd()
        .args(["analyze", "-f", "json"])
        .write_stdin("DELETE FROM logs WHERE ts < :cutoff")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"DELETE\""))
        .stdout(predicate::str::contains("\"cutoff\""));
}

#[test]
fn test_analyze_garbage() {
    cmd()
        .args(["analyze", "-f", "json"])
        .write_stdin("????")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"UNKNOWN\""));
}

#[test]
fn test_missing_file() {
    cmd()
        .args(["format", "/nonexistent/query.sql"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_invalid_env_value() {
    cmd()
        .arg("format")
        .env("SQL_GLANCE_MAX_LINE_LENGTH", "wide")
        .write_stdin("select 1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("format"))
        .stdout(predicate::str::contains("analyze"));
}
