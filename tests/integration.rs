use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("connwatch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("connwatch"))
        .stdout(predicate::str::contains("connection monitor"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("connwatch").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("connwatch"));
}

#[test]
fn test_invalid_argument() {
    let mut cmd = Command::cargo_bin("connwatch").unwrap();
    cmd.arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_once_prints_table_header() {
    let mut cmd = Command::cargo_bin("connwatch").unwrap();
    cmd.args(["--once", "-t", "-n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Proto"))
        .stdout(predicate::str::contains("Remote address"));
}

#[test]
fn test_once_without_protocol_flags_shows_both() {
    // No -t/-u defaults to monitoring both tables; the run must still
    // succeed and print the header.
    let mut cmd = Command::cargo_bin("connwatch").unwrap();
    cmd.args(["--once", "-n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("STATE"));
}

#[test]
fn test_poll_interval_validation() {
    let mut cmd = Command::cargo_bin("connwatch").unwrap();
    cmd.args(["-s", "0", "--once"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Poll interval too small"));

    let mut cmd = Command::cargo_bin("connwatch").unwrap();
    cmd.args(["-s", "4000", "--once"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Poll interval too large"));
}

#[test]
fn test_log_path_validation() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("connwatch").unwrap();
    cmd.args(["--once", "-t", "-n", "-f"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn test_snapshot_log_file_written() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("conn.log");

    let mut cmd = Command::cargo_bin("connwatch").unwrap();
    cmd.args(["--once", "-t", "-n", "-f"])
        .arg(&log_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("connections) ==="));
}
