//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("cards").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("cards").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Seed the card pool"));
}

#[test]
fn test_seed_requires_database_url() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("cards").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .env("HOME", dir.path())
        .arg("seed")
        .arg("cards.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--database-url"));
}

#[test]
fn test_seed_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("cards").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("seed")
        .arg("missing.txt")
        .arg("--database-url")
        .arg("postgres://localhost/unused");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
