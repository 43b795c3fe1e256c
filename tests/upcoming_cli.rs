mod support;

use chrono::{Days, Local};
use predicates::prelude::*;
use serde_json::Value;

use support::{taskman_cmd, TestDir};

fn add_with_due(dir: &TestDir, title: &str, offset_days: u64) {
    let due = Local::now()
        .date_naive()
        .checked_add_days(Days::new(offset_days))
        .expect("due date")
        .to_string();
    taskman_cmd(dir)
        .args(["add", title, "--due", &due])
        .assert()
        .success();
}

fn upcoming_titles(dir: &TestDir, extra: &[&str]) -> Vec<String> {
    let mut args = vec!["upcoming"];
    args.extend_from_slice(extra);
    args.push("--json");
    let output = taskman_cmd(dir)
        .args(&args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).expect("upcoming json");
    value["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|task| task["title"].as_str().expect("title").to_string())
        .collect()
}

#[test]
fn upcoming_window_is_inclusive_on_both_ends() {
    let dir = TestDir::new();
    add_with_due(&dir, "Due today", 0);
    add_with_due(&dir, "Due in a week", 7);
    add_with_due(&dir, "Due in eight days", 8);
    taskman_cmd(&dir)
        .args(["add", "No due date"])
        .assert()
        .success();

    let titles = upcoming_titles(&dir, &[]);
    assert_eq!(titles, vec!["Due today", "Due in a week"]);
}

#[test]
fn upcoming_skips_completed_tasks() {
    let dir = TestDir::new();
    add_with_due(&dir, "Due tomorrow", 1);
    add_with_due(&dir, "Also due tomorrow", 1);
    taskman_cmd(&dir).args(["complete", "1"]).assert().success();

    let titles = upcoming_titles(&dir, &[]);
    assert_eq!(titles, vec!["Also due tomorrow"]);
}

#[test]
fn days_flag_overrides_window() {
    let dir = TestDir::new();
    add_with_due(&dir, "Due tomorrow", 1);
    add_with_due(&dir, "Due in three days", 3);

    let titles = upcoming_titles(&dir, &["--days", "1"]);
    assert_eq!(titles, vec!["Due tomorrow"]);
}

#[test]
fn config_sets_default_window() {
    let dir = TestDir::new();
    dir.write_config("[ui]\nupcoming_days = 2\n").expect("config");
    add_with_due(&dir, "Due in two days", 2);
    add_with_due(&dir, "Due in five days", 5);

    let titles = upcoming_titles(&dir, &[]);
    assert_eq!(titles, vec!["Due in two days"]);
}

#[test]
fn config_storage_file_is_used() {
    let dir = TestDir::new();
    dir.write_config("[storage]\nfile = \"work-tasks.json\"\n")
        .expect("config");

    taskman_cmd(&dir)
        .args(["add", "Buy milk"])
        .assert()
        .success();

    assert!(!dir.tasks_file().exists());
    assert!(dir.path().join("work-tasks.json").exists());

    taskman_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("All tasks (1)"));
}
