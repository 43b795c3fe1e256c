//! Command-line interface for taskman
//!
//! This module defines the CLI structure using clap derive macros.
//! Each command group is implemented in its own submodule.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::TaskStore;

mod add;
mod complete;
mod delete;
mod list;
mod stats;
mod update;

/// taskman - Personal Task Manager
///
/// A single-user task list persisted to a flat JSON file: add, update,
/// delete, complete, filter, upcoming view, and statistics.
#[derive(Parser, Debug)]
#[command(name = "taskman")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the task file (defaults to tasks.json, see .taskman.toml)
    #[arg(long, global = true, env = "TASKMAN_FILE")]
    pub file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all tasks
    List,

    /// Add a new task
    Add {
        /// Task title (required, must be non-empty)
        title: String,

        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Category: work, personal, study, health, other
        #[arg(long, default_value = "other")]
        category: String,

        /// Priority: high, medium, low
        #[arg(long, default_value = "medium")]
        priority: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },

    /// Update an existing task (omitted flags keep current values)
    Update {
        /// Task id
        id: u32,

        /// New title (empty keeps the current title)
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New priority
        #[arg(long)]
        priority: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        /// Remove the due date
        #[arg(long, conflicts_with = "due")]
        clear_due: bool,
    },

    /// Delete a task and renumber the remaining ones
    Delete {
        /// Task id
        id: u32,

        /// Confirm the deletion
        #[arg(short, long)]
        yes: bool,
    },

    /// Mark an incomplete task as completed
    Complete {
        /// Task id
        id: u32,
    },

    /// List tasks in one category
    Category {
        /// Category: work, personal, study, health, other
        category: String,
    },

    /// List tasks with one priority
    Priority {
        /// Priority: high, medium, low
        priority: String,
    },

    /// List incomplete tasks due within the next days
    Upcoming {
        /// Window in days (default from config, normally 7)
        #[arg(long)]
        days: Option<u64>,
    },

    /// Show task statistics
    Stats,

    /// Launch the interactive UI
    Ui,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let options = crate::output::OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };

        match self.command {
            Commands::List => list::run_all(self.file.as_deref(), options),
            Commands::Add {
                title,
                description,
                category,
                priority,
                due,
            } => add::run(add::AddOptions {
                title,
                description,
                category,
                priority,
                due,
                file: self.file,
                output: options,
            }),
            Commands::Update {
                id,
                title,
                description,
                category,
                priority,
                due,
                clear_due,
            } => update::run(update::UpdateOptions {
                id,
                title,
                description,
                category,
                priority,
                due,
                clear_due,
                file: self.file,
                output: options,
            }),
            Commands::Delete { id, yes } => delete::run(delete::DeleteOptions {
                id,
                yes,
                file: self.file,
                output: options,
            }),
            Commands::Complete { id } => complete::run(complete::CompleteOptions {
                id,
                file: self.file,
                output: options,
            }),
            Commands::Category { category } => {
                list::run_category(&category, self.file.as_deref(), options)
            }
            Commands::Priority { priority } => {
                list::run_priority(&priority, self.file.as_deref(), options)
            }
            Commands::Upcoming { days } => list::run_upcoming(days, self.file.as_deref(), options),
            Commands::Stats => stats::run(self.file.as_deref(), options),
            Commands::Ui => crate::ui::run(self.file.as_deref()),
        }
    }
}

/// Load config from the working directory and open the task store.
pub(crate) fn open_store(file: Option<&Path>) -> (Config, TaskStore) {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load_from_dir(&cwd);
    let store = TaskStore::load(config.task_file(file));
    (config, store)
}

/// Parse a YYYY-MM-DD due date argument.
pub(crate) fn parse_due(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        Error::InvalidArgument(format!("invalid due date '{}': expected YYYY-MM-DD", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_due_accepts_iso_dates() {
        let date = parse_due("2026-09-01").expect("parse");
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 9, 1).expect("date"));
    }

    #[test]
    fn parse_due_rejects_other_formats() {
        assert!(parse_due("09/01/2026").is_err());
        assert!(parse_due("tomorrow").is_err());
    }
}
