//! End-to-end tests for the `wt` binary.
//!
//! Each test runs the binary with an isolated HOME, a fixed `--now`, and
//! (where needed) a config file in a temp directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn wt_binary() -> String {
    env!("CARGO_BIN_EXE_wt").to_string()
}

/// Run `wt` with an isolated environment rooted at `home`.
fn run_wt(home: &Path, args: &[&str]) -> Output {
    Command::new(wt_binary())
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("WT_DEADLINE")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run wt")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "wt should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("wt.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_status_with_default_schedule() {
    let temp = TempDir::new().unwrap();
    let output = run_wt(
        temp.path(),
        &[
            "status",
            "--now",
            "2025-01-02T11:30",
            "--deadline",
            "2025-01-02T13:30",
        ],
    );
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Remaining:    01:00:00"), "{stdout}");
    assert!(stdout.contains("Status:       counting"), "{stdout}");
}

#[test]
fn test_status_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    let output = run_wt(
        temp.path(),
        &[
            "status",
            "--json",
            "--now",
            "2025-01-02 18:00",
            "--deadline",
            "2025-01-03 10:00",
        ],
    );
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();

    assert_eq!(json["remaining_ms"], 90 * 60 * 1000);
    assert_eq!(json["pause"], "after-hours");
    assert_eq!(json["resume_at"], "2025-01-03T08:30:00");
}

#[test]
fn test_status_without_deadline_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_wt(temp.path(), &["status", "--now", "2025-01-02T10:00"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no deadline given"), "{stderr}");
}

#[test]
fn test_deadline_and_schedule_from_config_file() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        r#"
deadline = "2025-01-03T10:00:00"

[schedule]
blocks = [{ start = "08:30", end = "17:30" }]
holidays = ["2025-01-02"]
"#,
    );
    let config = config.to_str().unwrap();

    // Thursday is a holiday in this config, so only Friday morning counts.
    let output = run_wt(
        temp.path(),
        &["--config", config, "status", "--now", "2025-01-02T09:00"],
    );
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Remaining:    01:30:00"), "{stdout}");
    assert!(stdout.contains("paused (holiday)"), "{stdout}");

    // Single block: lunch time counts.
    let output = run_wt(
        temp.path(),
        &["--config", config, "check", "--at", "2025-01-03T12:30"],
    );
    assert!(stdout_of(&output).contains("Working: yes"));
}

#[test]
fn test_deadline_from_environment() {
    let temp = TempDir::new().unwrap();
    let output = Command::new(wt_binary())
        .env("HOME", temp.path())
        .env_remove("XDG_CONFIG_HOME")
        .env("WT_DEADLINE", "2025-01-02T17:00:00")
        .args(["status", "--now", "2025-01-02T16:00"])
        .output()
        .unwrap();
    assert!(stdout_of(&output).contains("Remaining:    01:00:00"));
}

#[test]
fn test_invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        r#"
[schedule]
blocks = [{ start = "17:00", end = "09:00" }]
"#,
    );

    let output = run_wt(
        temp.path(),
        &["--config", config.to_str().unwrap(), "check"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load configuration"), "{stderr}");
}

#[test]
fn test_check_after_hours() {
    let temp = TempDir::new().unwrap();
    let output = run_wt(temp.path(), &["check", "--at", "2025-01-02T18:00"]);
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Working: no (after-hours)"), "{stdout}");
    assert!(stdout.contains("Resumes: Fri 2025-01-03 08:30"), "{stdout}");
}

#[test]
fn test_between_counts_only_work_time() {
    let temp = TempDir::new().unwrap();
    let output = run_wt(
        temp.path(),
        &["between", "2025-01-03T17:00", "2025-01-06T09:00"],
    );
    assert_eq!(stdout_of(&output), "Work time: 01:00:00 (60 min)\n");
}

#[test]
fn test_add_hours_and_minutes() {
    let temp = TempDir::new().unwrap();
    let output = run_wt(
        temp.path(),
        &[
            "add",
            "--from",
            "2025-01-02T07:00",
            "--hours",
            "1",
            "--minutes",
            "30",
        ],
    );
    assert!(stdout_of(&output).contains("Done:  Thu 2025-01-02 10:00"));
}

#[test]
fn test_shift_round_trip() {
    let temp = TempDir::new().unwrap();
    let now = "2025-01-02T15:00";

    let output = run_wt(
        temp.path(),
        &["shift", "--now", now, "--deadline", "2025-01-02T17:00", "--by", "+1h"],
    );
    let stdout = stdout_of(&output);
    assert!(stdout.contains("New deadline:      Fri 2025-01-03 09:00"), "{stdout}");
    assert!(stdout.contains("Remaining:         03:00:00"), "{stdout}");

    let output = run_wt(
        temp.path(),
        &["shift", "--now", now, "--deadline", "2025-01-03T09:00", "--by", "-60"],
    );
    let stdout = stdout_of(&output);
    assert!(stdout.contains("New deadline:      Thu 2025-01-02 17:00"), "{stdout}");
    assert!(stdout.contains("Remaining:         02:00:00"), "{stdout}");
}

#[test]
fn test_remind_reports_due_reminder() {
    let temp = TempDir::new().unwrap();
    let output = run_wt(
        temp.path(),
        &[
            "remind",
            "--now",
            "2025-01-02T17:05",
            "--deadline",
            "2025-01-03T09:00",
        ],
    );
    assert!(stdout_of(&output).starts_with("deadline-update:"));
}

#[test]
fn test_no_subcommand_shows_help() {
    let temp = TempDir::new().unwrap();
    let output = run_wt(temp.path(), &[]);
    assert!(stdout_of(&output).contains("Usage:"));
}
