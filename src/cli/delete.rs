//! taskman delete command implementation.
//!
//! Deletion is gated on an explicit `--yes`. Without it no mutation
//! happens and the command reports what confirmation would do - an
//! informational outcome, not an error.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::DeleteOutcome;

pub struct DeleteOptions {
    pub id: u32,
    pub yes: bool,
    pub file: Option<PathBuf>,
    pub output: OutputOptions,
}

#[derive(Serialize)]
struct DeleteData {
    id: u32,
    deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    remaining: usize,
}

pub fn run(opts: DeleteOptions) -> Result<()> {
    let (_, mut store) = super::open_store(opts.file.as_deref());

    match store.delete(opts.id, opts.yes)? {
        DeleteOutcome::Deleted(task) => {
            let data = DeleteData {
                id: opts.id,
                deleted: true,
                title: Some(task.title.clone()),
                remaining: store.len(),
            };
            let mut human = HumanOutput::new(format!("Task '{}' deleted", task.title));
            human.push_summary("remaining tasks", store.len().to_string());
            human.push_detail("remaining ids renumbered to 1..N".to_string());
            emit_success(opts.output, "delete", &data, Some(&human))
        }
        DeleteOutcome::ConfirmationRequired => {
            let data = DeleteData {
                id: opts.id,
                deleted: false,
                title: None,
                remaining: store.len(),
            };
            let mut human = HumanOutput::new(format!(
                "Deletion of task {} needs confirmation",
                opts.id
            ));
            human.push_next_step(format!("taskman delete {} --yes", opts.id));
            emit_success(opts.output, "delete", &data, Some(&human))
        }
    }
}
