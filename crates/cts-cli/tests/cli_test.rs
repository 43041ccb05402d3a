//! The `cts-tracker` binary: exit status and error output.

use std::fs;
use std::process::Command;

fn tracker_cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cts-tracker"));
    cmd.env("HOME", home)
        .env_remove("CTS_SOURCE_PATH")
        .env_remove("CTS_RENDERER")
        .env_remove("CTS_HISTORY_MAX_LENGTH")
        .env("CTS_LOG", "off");
    cmd
}

#[test]
fn missing_repo_argument_exits_with_input_error() {
    let home = tempfile::tempdir().unwrap();
    let output = tracker_cmd(home.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("[INPUT_UNAVAILABLE]"), "stderr: {stderr}");
}

#[test]
fn nonexistent_repo_exits_with_input_error() {
    let home = tempfile::tempdir().unwrap();
    let output = tracker_cmd(home.path())
        .args(["--repo", "/nonexistent/cts-results", "--no-sync"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[INPUT_UNAVAILABLE]"));
}

#[test]
fn records_a_dump_without_sync() {
    let home = tempfile::tempdir().unwrap();
    let repo = tempfile::tempdir().unwrap();
    fs::create_dir(repo.path().join("data")).unwrap();
    fs::create_dir(repo.path().join("images")).unwrap();
    fs::write(
        repo.path().join("data/dump.json"),
        r#"{"cat": {"tests": {"t": {"properties": {"is_disabled": false}}}}}"#,
    )
    .unwrap();

    let output = tracker_cmd(home.path())
        .arg("--repo")
        .arg(repo.path())
        .args(["--no-sync", "--diagnostics"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Tests: 1 (0 disabled)"));
    assert!(stdout.contains("Recorded run (1 in history"));
    assert!(repo.path().join("data/history.db").exists());

    let again = tracker_cmd(home.path())
        .arg("-R")
        .arg(repo.path())
        .arg("--no-sync")
        .output()
        .unwrap();
    assert!(again.status.success());
    assert!(String::from_utf8_lossy(&again.stdout).contains("history unchanged"));
}

#[test]
fn zero_history_length_is_a_config_error() {
    let home = tempfile::tempdir().unwrap();
    let repo = tempfile::tempdir().unwrap();
    let output = tracker_cmd(home.path())
        .arg("--repo")
        .arg(repo.path())
        .args(["-m", "0", "--no-sync"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("[CONFIG_ERROR]"));
}
