//! taskman list, category, priority, and upcoming command implementations.

use std::path::Path;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::{Category, Priority, Task};

pub fn run_all(file: Option<&Path>, output: OutputOptions) -> Result<()> {
    let (_, store) = super::open_store(file);
    let tasks: Vec<Task> = store.tasks().to_vec();

    let human = list_output(
        format!("All tasks ({})", tasks.len()),
        &tasks,
        "No tasks found. Add a new task to get started.",
    );
    emit_success(output, "list", &tasks, Some(&human))
}

pub fn run_category(category: &str, file: Option<&Path>, output: OutputOptions) -> Result<()> {
    let category: Category = category.parse()?;
    let (_, store) = super::open_store(file);
    let tasks: Vec<Task> = store.by_category(category).cloned().collect();

    let human = list_output(
        format!("Tasks in category {} ({})", category, tasks.len()),
        &tasks,
        &format!("No tasks found in category: {category}"),
    );
    emit_success(output, "category", &tasks, Some(&human))
}

pub fn run_priority(priority: &str, file: Option<&Path>, output: OutputOptions) -> Result<()> {
    let priority: Priority = priority.parse()?;
    let (_, store) = super::open_store(file);
    let tasks: Vec<Task> = store.by_priority(priority).cloned().collect();

    let human = list_output(
        format!("Tasks with priority {} ({})", priority, tasks.len()),
        &tasks,
        &format!("No tasks found with priority: {priority}"),
    );
    emit_success(output, "priority", &tasks, Some(&human))
}

pub fn run_upcoming(days: Option<u64>, file: Option<&Path>, output: OutputOptions) -> Result<()> {
    let (config, store) = super::open_store(file);
    let days = days.unwrap_or(config.ui.upcoming_days);
    let tasks: Vec<Task> = store.upcoming(days).into_iter().cloned().collect();

    let human = list_output(
        format!("Upcoming tasks, next {} days ({})", days, tasks.len()),
        &tasks,
        &format!("No upcoming tasks in the next {days} days."),
    );
    emit_success(output, "upcoming", &tasks, Some(&human))
}

fn list_output(header: String, tasks: &[Task], empty_message: &str) -> HumanOutput {
    let mut human = HumanOutput::new(header);
    if tasks.is_empty() {
        human.push_detail(empty_message.to_string());
        return human;
    }
    for task in tasks {
        human.push_detail(task.summary());
    }
    human
}
