//! taskman update command implementation.
//!
//! Omitted flags keep the current field values, mirroring a form that is
//! pre-filled with the existing task. An empty `--title` silently keeps
//! the old title.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::{Category, Priority};

pub struct UpdateOptions {
    pub id: u32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub due: Option<String>,
    pub clear_due: bool,
    pub file: Option<PathBuf>,
    pub output: OutputOptions,
}

pub fn run(opts: UpdateOptions) -> Result<()> {
    let (_, mut store) = super::open_store(opts.file.as_deref());
    let current = store
        .find_by_id(opts.id)
        .cloned()
        .ok_or(Error::TaskNotFound(opts.id))?;

    let category: Category = match opts.category.as_deref() {
        Some(value) => value.parse()?,
        None => current.category,
    };
    let priority: Priority = match opts.priority.as_deref() {
        Some(value) => value.parse()?,
        None => current.priority,
    };
    let due_date = if opts.clear_due {
        None
    } else {
        match opts.due.as_deref() {
            Some(value) => Some(super::parse_due(value)?),
            None => current.due_date,
        }
    };
    let title = opts.title.unwrap_or_default();
    let description = opts.description.unwrap_or(current.description);

    let task = store.update(opts.id, &title, &description, category, priority, due_date)?;

    let mut human = HumanOutput::new(format!("Task {} updated", task.id));
    human.push_detail(task.summary());

    emit_success(opts.output, "update", &task, Some(&human))
}
