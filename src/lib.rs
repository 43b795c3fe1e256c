//! taskman - Personal Task Manager Library
//!
//! This library provides the core functionality for the taskman CLI and
//! its form-based TUI: a small task list held in memory and persisted
//! wholesale to a flat JSON file after every mutation.
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.taskman.toml`
//! - `error`: Error types and result aliases
//! - `output`: Human and JSON output envelopes
//! - `stats`: Aggregate statistics over the task list
//! - `store`: Task store (load, persist, ids) and task operations
//! - `task`: Task record, category, and priority types
//! - `ui`: Interactive ratatui front-end

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod stats;
pub mod store;
pub mod task;
pub mod ui;

pub use error::{Error, Result};
