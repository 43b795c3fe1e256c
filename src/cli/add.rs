//! taskman add command implementation.

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::{Category, Priority};

pub struct AddOptions {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub due: Option<String>,
    pub file: Option<PathBuf>,
    pub output: OutputOptions,
}

pub fn run(opts: AddOptions) -> Result<()> {
    let category: Category = opts.category.parse()?;
    let priority: Priority = opts.priority.parse()?;
    let due_date = opts.due.as_deref().map(super::parse_due).transpose()?;

    let (_, mut store) = super::open_store(opts.file.as_deref());
    let task = store.add(&opts.title, &opts.description, category, priority, due_date)?;

    let mut human = HumanOutput::new(format!("Task '{}' added", task.title));
    human.push_summary("id", task.id.to_string());
    human.push_summary("category", task.category.to_string());
    human.push_summary("priority", task.priority.to_string());
    if let Some(due) = task.due_date {
        human.push_summary("due", due.to_string());
    }

    emit_success(opts.output, "add", &task, Some(&human))
}
