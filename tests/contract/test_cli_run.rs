#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Contract tests for `aoc run` and the bare `aoc <task>` shorthand.
// Puzzle entry points are shell scripts run with `sh` as the runner.

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn setup_workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write(root, "aoc.toml", "[runner]\ncommand = \"sh\"\n");
    write(root, "day-1/a", "echo \"day 1 part a data=${1:-actual}\"\n");
    write(root, "day-1/b", "echo \"day 1 part b\"\nexit 3\n");
    write(root, "day-1/a.data.txt", "");
    write(root, "day-1/a.data.sample.txt", "");
    write(root, "day-1/b.data.txt", "");

    temp_dir
}

#[test]
fn test_run_by_full_alias() {
    let temp_dir = setup_workspace();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["run", "day-1-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("day 1 part a data=actual"));
}

#[test]
fn test_run_day_shorthand_selects_part_a() {
    let temp_dir = setup_workspace();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(&temp_dir)
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("day 1 part a data=actual"));
}

#[test]
fn test_run_sample_data_set() {
    let temp_dir = setup_workspace();

    for alias in ["day-1-a-sample", "1-a-sample", "day-1-sample", "1-sample"] {
        let mut cmd = Command::cargo_bin("aoc").unwrap();
        cmd.current_dir(&temp_dir)
            .arg(alias)
            .assert()
            .success()
            .stdout(predicate::str::contains("day 1 part a data=sample"));
    }
}

#[test]
fn test_run_propagates_exit_code() {
    let temp_dir = setup_workspace();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(&temp_dir)
        .arg("1-b")
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("day 1 part b"))
        .stderr(predicate::str::contains("Task '1-b' failed with exit code 3"));
}

#[test]
fn test_run_unknown_task() {
    let temp_dir = setup_workspace();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["run", "day-1-b-sample"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Task 'day-1-b-sample' not found"))
        .stderr(predicate::str::contains("day-1-b"));
}

#[test]
fn test_run_passes_extra_arguments() {
    let temp_dir = setup_workspace();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["run", "1-a", "--", "custom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("day 1 part a data=custom"));
}

#[test]
fn test_run_dry_run_prints_command() {
    let temp_dir = setup_workspace();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["run", "--dry-run", "1-sample"])
        .assert()
        .success()
        .stdout(predicate::str::diff("sh day-1/a sample\n"));
}

#[test]
fn test_run_with_workspace_flag() {
    let temp_dir = setup_workspace();
    let outer = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(&outer)
        .arg("-C")
        .arg(temp_dir.path())
        .args(["run", "day-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("day 1 part a data=actual"));
}

#[test]
fn test_run_json_output() {
    let temp_dir = setup_workspace();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    let output = cmd
        .current_dir(&temp_dir)
        .args(["run", "--json", "1-b"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('{').unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(json["status"], "failure");
    assert_eq!(json["exit_code"], 3);
    assert_eq!(json["command"], "sh day-1/b");
}

#[test]
fn test_run_rejects_path_like_task_name() {
    let temp_dir = setup_workspace();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["run", "day-1/a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot contain path separators"));
}
