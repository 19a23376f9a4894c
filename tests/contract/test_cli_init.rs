// Contract tests for `aoc init`

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_aoc_init_basic_success() {
    let temp_dir = TempDir::new().unwrap();
    let project_path = temp_dir.path();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(project_path).arg("init");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Created aoc.toml"))
        .stdout(predicate::str::contains("100 created"));

    let config_path = project_path.join("aoc.toml");
    assert!(config_path.exists(), "aoc.toml should be created");

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[workspace]"));
    assert!(content.contains("[runner]"));
    assert!(content.contains("days = 25"));

    for day in [1, 25] {
        for file in ["a.data.txt", "a.data.sample.txt", "b.data.txt", "b.data.sample.txt"] {
            assert!(project_path.join(format!("day-{day}")).join(file).is_file());
        }
    }
    assert!(!project_path.join("day-26").exists());
}

#[test]
fn test_aoc_init_with_name_days_and_runner() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(temp_dir.path()).args([
        "init",
        "--name",
        "aoc-2024",
        "--days",
        "3",
        "--runner",
        "python3",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Created aoc.toml for aoc-2024 (3 days)"));

    let content = fs::read_to_string(temp_dir.path().join("aoc.toml")).unwrap();
    assert!(content.contains("name = \"aoc-2024\""));
    assert!(content.contains("command = \"python3\""));
    assert!(temp_dir.path().join("day-3/b.data.txt").is_file());
    assert!(!temp_dir.path().join("day-4").exists());
}

#[test]
fn test_aoc_init_into_new_directory() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["init", "advent", "--days", "1"]);

    cmd.assert().success();

    let content = fs::read_to_string(temp_dir.path().join("advent/aoc.toml")).unwrap();
    assert!(content.contains("name = \"advent\""));
    assert!(temp_dir.path().join("advent/day-1/a.data.txt").is_file());
}

#[test]
fn test_aoc_init_file_already_exists_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("aoc.toml");
    fs::write(&config_path, "existing content").unwrap();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(temp_dir.path()).arg("init");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "aoc.toml already exists (use --force to overwrite)",
        ));

    assert_eq!(fs::read_to_string(&config_path).unwrap(), "existing content");
    assert!(!temp_dir.path().join("day-1").exists());
}

#[test]
fn test_aoc_init_file_already_exists_with_force() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("aoc.toml"), "existing content").unwrap();
    fs::create_dir_all(temp_dir.path().join("day-1")).unwrap();
    fs::write(temp_dir.path().join("day-1/a.data.txt"), "my input").unwrap();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["init", "--force", "--days", "1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 created, 1 already present"));

    let content = fs::read_to_string(temp_dir.path().join("aoc.toml")).unwrap();
    assert!(content.contains("[workspace]"));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("day-1/a.data.txt")).unwrap(),
        "my input"
    );
}

#[test]
fn test_aoc_init_rejects_invalid_day_count() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["init", "--days", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid day count 0"));
}

#[test]
fn test_aoc_init_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["init", "--json", "--days", "2", "--name", "puzzles"]);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["workspace_name"], "puzzles");
    assert_eq!(json["days"], 2);
    assert_eq!(json["runner"], "tsx");
    assert_eq!(json["created_files"], 8);
}

#[test]
fn test_aoc_init_data_pattern_narrows_discovery() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["init", "--days", "1", "--pattern", "day-*/*.data.txt"])
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("aoc.toml")).unwrap();
    assert!(content.contains("pattern = \"day-*/*.data.txt\""));

    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("tsx day-1/a\n"))
        .stdout(predicate::str::contains("sample").not());
}
