//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("userbase").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("bootstrap"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("userbase").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--db-tls"))
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn test_bootstrap_help() {
    let mut cmd = Command::cargo_bin("userbase").unwrap();
    cmd.arg("bootstrap").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Transport security mode"));
}

#[test]
fn test_serve_rejects_malformed_database_url() {
    let mut cmd = Command::cargo_bin("userbase").unwrap();
    cmd.env_remove("DATABASE_URL")
        .arg("serve")
        .arg("--port")
        .arg("0")
        .arg("--database-url")
        .arg("not a url");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid database url"));
}
