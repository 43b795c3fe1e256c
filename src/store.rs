//! Task store for taskman.
//!
//! Owns the authoritative task list and its backing file. The whole
//! collection lives in memory for the session; every mutating operation
//! rewrites the full file immediately, so the in-memory list and the disk
//! file stay convergent. Reads fail soft (missing or corrupt file yields an
//! empty list); write failures propagate as fatal I/O errors.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Days, Local, NaiveDate};

use crate::error::{Error, Result};
use crate::stats::TaskStats;
use crate::task::{Category, Priority, Task};

/// Default backing file name in the working directory.
pub const DEFAULT_FILE: &str = "tasks.json";

/// Default upcoming window in days.
pub const DEFAULT_UPCOMING_DAYS: u64 = 7;

/// Outcome of a delete request.
///
/// Deletion requires an explicit confirmation from the caller. A missing
/// confirmation is informational, not an error, and performs no mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Task),
    ConfirmationRequired,
}

/// The in-memory task collection plus its backing file.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load the store from `path`.
    ///
    /// An absent or unparseable file yields an empty collection; the parse
    /// failure is logged but never surfaced to the caller.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(tasks) => tasks,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "task file unparseable, starting empty");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self { path, tasks }
    }

    /// Create an empty store backed by `path` without touching the disk.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tasks: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Persist the full collection, overwriting prior contents.
    ///
    /// Writes to a temp file in the same directory and renames over the
    /// target so readers never observe a partial file.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.tasks)?;
        write_atomic(&self.path, json.as_bytes())?;
        tracing::debug!(path = %self.path.display(), tasks = self.tasks.len(), "persisted task list");
        Ok(())
    }

    /// Next id to assign: `count + 1`. Ids are never reused except through
    /// full renumbering after a delete.
    pub fn next_id(&self) -> u32 {
        self.tasks.len() as u32 + 1
    }

    /// Reassign ids to a dense 1..N sequence in current list order.
    pub fn renumber(&mut self) {
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.id = index as u32 + 1;
        }
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn find_by_id_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Add a new task and persist.
    ///
    /// Fails with [`Error::EmptyTitle`] when the title trims to empty.
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        category: Category,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Result<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        let task = Task {
            id: self.next_id(),
            title: title.to_string(),
            description: description.trim().to_string(),
            category,
            priority,
            due_date,
            completed: false,
            created_at: today(),
        };
        self.tasks.push(task.clone());
        self.save()?;
        Ok(task)
    }

    /// Overwrite the fields of an existing task and persist.
    ///
    /// A title that trims to empty silently keeps the old title (inherited
    /// form behavior, not a validation error). Description, category,
    /// priority, and due date are always overwritten.
    pub fn update(
        &mut self,
        id: u32,
        title: &str,
        description: &str,
        category: Category,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Result<Task> {
        let task = self.find_by_id_mut(id).ok_or(Error::TaskNotFound(id))?;

        let title = title.trim();
        if !title.is_empty() {
            task.title = title.to_string();
        }
        task.description = description.trim().to_string();
        task.category = category;
        task.priority = priority;
        task.due_date = due_date;
        let task = task.clone();

        self.save()?;
        Ok(task)
    }

    /// Delete a task, renumber the remainder to 1..N, and persist.
    ///
    /// Without `confirmed` this is a no-op returning
    /// [`DeleteOutcome::ConfirmationRequired`].
    pub fn delete(&mut self, id: u32, confirmed: bool) -> Result<DeleteOutcome> {
        if !confirmed {
            return Ok(DeleteOutcome::ConfirmationRequired);
        }

        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        let removed = self.tasks.remove(index);
        self.renumber();
        self.save()?;
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Mark an incomplete task as completed and persist.
    ///
    /// The lookup runs over incomplete tasks only: an already-completed id
    /// is outside the selectable set and reports not-found.
    pub fn mark_complete(&mut self, id: u32) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .filter(|task| !task.completed)
            .find(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        task.completed = true;
        let task = task.clone();

        self.save()?;
        Ok(task)
    }

    /// Tasks not yet completed, original order preserved.
    pub fn incomplete(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| !task.completed)
    }

    /// Tasks in the given category, original order preserved.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.category == category)
    }

    /// Tasks with the given priority, original order preserved.
    pub fn by_priority(&self, priority: Priority) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.priority == priority)
    }

    /// Incomplete tasks due within `[today, today + days]`, inclusive on
    /// both ends, at day granularity.
    pub fn upcoming(&self, days: u64) -> Vec<&Task> {
        self.upcoming_from(today(), days)
    }

    fn upcoming_from(&self, today: NaiveDate, days: u64) -> Vec<&Task> {
        let end = today
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX);
        self.tasks
            .iter()
            .filter(|task| !task.completed)
            .filter(|task| {
                task.due_date
                    .map(|due| today <= due && due <= end)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Aggregate counts over the current list.
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }
}

/// Write data atomically using temp file + rename.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
