mod support;

use predicates::prelude::*;
use serde_json::Value;

use support::{taskman_cmd, TestDir};

fn add_task(dir: &TestDir, args: &[&str]) -> Value {
    let mut full = vec!["add"];
    full.extend_from_slice(args);
    full.push("--json");
    let output = taskman_cmd(dir)
        .args(&full)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("add json")
}

#[test]
fn add_assigns_sequential_ids() {
    let dir = TestDir::new();

    let first = add_task(&dir, &["Buy milk"]);
    assert_eq!(first["data"]["id"], 1);
    assert_eq!(first["data"]["title"], "Buy milk");
    assert_eq!(first["data"]["category"], "Other");
    assert_eq!(first["data"]["priority"], "Medium");
    assert_eq!(first["data"]["due_date"], Value::Null);
    assert_eq!(first["data"]["completed"], false);

    let second = add_task(&dir, &["Call dentist", "--category", "health"]);
    assert_eq!(second["data"]["id"], 2);
    assert_eq!(second["data"]["category"], "Health");

    let on_disk = dir.read_tasks_json();
    let tasks = on_disk.as_array().expect("array");
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["id"], 1);
    assert_eq!(tasks[1]["id"], 2);
}

#[test]
fn add_rejects_blank_title() {
    let dir = TestDir::new();
    taskman_cmd(&dir)
        .args(["add", "   "])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Title cannot be empty"));
    assert!(!dir.tasks_file().exists());
}

#[test]
fn update_overwrites_given_fields() {
    let dir = TestDir::new();
    add_task(&dir, &["Buy milk"]);

    taskman_cmd(&dir)
        .args([
            "update",
            "1",
            "--priority",
            "high",
            "--due",
            "2026-09-01",
            "--json",
        ])
        .assert()
        .success();

    let tasks = dir.read_tasks_json();
    assert_eq!(tasks[0]["title"], "Buy milk");
    assert_eq!(tasks[0]["priority"], "High");
    assert_eq!(tasks[0]["due_date"], "2026-09-01");
}

#[test]
fn update_with_empty_title_keeps_old_title() {
    let dir = TestDir::new();
    add_task(&dir, &["Buy milk"]);

    taskman_cmd(&dir)
        .args(["update", "1", "--title", ""])
        .assert()
        .success();

    let tasks = dir.read_tasks_json();
    assert_eq!(tasks[0]["title"], "Buy milk");
}

#[test]
fn update_clear_due_removes_date() {
    let dir = TestDir::new();
    add_task(&dir, &["Buy milk", "--due", "2026-09-01"]);

    taskman_cmd(&dir)
        .args(["update", "1", "--clear-due"])
        .assert()
        .success();

    let tasks = dir.read_tasks_json();
    assert_eq!(tasks[0]["due_date"], Value::Null);
}

#[test]
fn update_unknown_id_fails() {
    let dir = TestDir::new();
    add_task(&dir, &["Buy milk"]);

    taskman_cmd(&dir)
        .args(["update", "7", "--title", "Nope"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Task not found: 7"));
}

#[test]
fn delete_without_yes_is_a_no_op() {
    let dir = TestDir::new();
    add_task(&dir, &["Buy milk"]);
    add_task(&dir, &["Call dentist"]);

    taskman_cmd(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("needs confirmation"))
        .stdout(predicate::str::contains("taskman delete 1 --yes"));

    let tasks = dir.read_tasks_json();
    assert_eq!(tasks.as_array().map(Vec::len), Some(2));
    assert_eq!(tasks[0]["title"], "Buy milk");
}

#[test]
fn delete_with_yes_renumbers_remaining_tasks() {
    let dir = TestDir::new();
    add_task(&dir, &["Buy milk"]);
    add_task(&dir, &["Call dentist"]);
    add_task(&dir, &["Write report"]);

    let output = taskman_cmd(&dir)
        .args(["delete", "2", "--yes", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).expect("delete json");
    assert_eq!(value["data"]["deleted"], true);
    assert_eq!(value["data"]["title"], "Call dentist");
    assert_eq!(value["data"]["remaining"], 2);

    let tasks = dir.read_tasks_json();
    let tasks = tasks.as_array().expect("array");
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["id"], 1);
    assert_eq!(tasks[0]["title"], "Buy milk");
    assert_eq!(tasks[1]["id"], 2);
    assert_eq!(tasks[1]["title"], "Write report");
}

#[test]
fn complete_marks_task_done() {
    let dir = TestDir::new();
    add_task(&dir, &["Buy milk"]);

    taskman_cmd(&dir)
        .args(["complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked as complete"));

    let tasks = dir.read_tasks_json();
    assert_eq!(tasks[0]["completed"], true);
}

#[test]
fn complete_on_completed_task_fails() {
    let dir = TestDir::new();
    add_task(&dir, &["Buy milk"]);

    taskman_cmd(&dir).args(["complete", "1"]).assert().success();
    taskman_cmd(&dir)
        .args(["complete", "1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Task not found: 1"));
}

#[test]
fn file_flag_overrides_default_path() {
    let dir = TestDir::new();
    taskman_cmd(&dir)
        .args(["--file", "other.json", "add", "Buy milk"])
        .assert()
        .success();

    assert!(!dir.tasks_file().exists());
    assert!(dir.path().join("other.json").exists());
}
