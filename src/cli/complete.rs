//! taskman complete command implementation.

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct CompleteOptions {
    pub id: u32,
    pub file: Option<PathBuf>,
    pub output: OutputOptions,
}

pub fn run(opts: CompleteOptions) -> Result<()> {
    let (_, mut store) = super::open_store(opts.file.as_deref());
    let task = store.mark_complete(opts.id)?;

    let mut human = HumanOutput::new(format!("Task '{}' marked as complete", task.title));
    human.push_summary("id", task.id.to_string());

    emit_success(opts.output, "complete", &task, Some(&human))
}
