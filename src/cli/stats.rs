//! taskman stats command implementation.

use std::path::Path;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub fn run(file: Option<&Path>, output: OutputOptions) -> Result<()> {
    let (_, store) = super::open_store(file);
    let stats = store.stats();

    let mut human = HumanOutput::new("Task statistics");
    human.push_summary("total", stats.total.to_string());
    human.push_summary("completed", stats.completed.to_string());
    human.push_summary("incomplete", stats.incomplete.to_string());
    human.push_summary(
        "completion rate",
        format!("{:.1}%", stats.completion_rate),
    );
    for entry in &stats.by_category {
        human.push_detail(format!("category {}: {}", entry.category, entry.count));
    }
    for entry in &stats.by_priority {
        human.push_detail(format!("priority {}: {}", entry.priority, entry.count));
    }

    emit_success(output, "stats", &stats, Some(&human))
}
