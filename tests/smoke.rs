//! Smoke tests -- verify the binary runs and the CLI pipeline records
//! and replays history.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    Command::cargo_bin("pacetrack")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Self-hosted marathon progress tracker",
        ));
}

#[test]
fn test_cli_version() {
    Command::cargo_bin("pacetrack")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains("pacetrack"));
}

#[test]
fn test_serve_subcommand_exists() {
    Command::cargo_bin("pacetrack")
        .unwrap()
        .args(["serve", "--help"])
        .assert()
        .success();
}

#[test]
fn test_track_then_history() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("log.csv");

    Command::cargo_bin("pacetrack")
        .unwrap()
        .args([
            "track",
            "--name",
            "Alice",
            "--total",
            "42.2",
            "--covered",
            "21.1",
            "--elapsed",
            "2.0",
            "--target",
            "4.0",
            "--data",
        ])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicates::str::contains("10.55 km/h"));

    Command::cargo_bin("pacetrack")
        .unwrap()
        .arg("history")
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicates::str::contains("Alice").and(predicates::str::contains("10.55 km/h")));
}

#[test]
fn test_track_rejects_bad_submission() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("log.csv");

    Command::cargo_bin("pacetrack")
        .unwrap()
        .args([
            "track", "--name", "Bob", "--total", "10", "--covered", "15", "--elapsed", "1",
            "--target", "2", "--data",
        ])
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicates::str::contains(
            "Distance covered cannot exceed total distance.",
        ));

    // Rejection must not touch the store.
    assert!(!data.exists());
}

#[test]
fn test_history_empty_store() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("pacetrack")
        .unwrap()
        .arg("history")
        .arg("--data")
        .arg(dir.path().join("missing.csv"))
        .assert()
        .success()
        .stdout(predicates::str::contains("No historical data available yet."));
}
