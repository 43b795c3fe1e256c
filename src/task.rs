//! Task model for taskman.
//!
//! A task is a flat record persisted as one element of the JSON array in
//! `tasks.json`. Field order matters for the on-disk format and follows the
//! struct declaration order below. `due_date` serializes as an explicit
//! `null` when unset.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Fixed category set for tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Work,
    Personal,
    Study,
    Health,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Work,
        Category::Personal,
        Category::Study,
        Category::Health,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Study => "Study",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            "study" => Ok(Category::Study),
            "health" => Ok(Category::Health),
            "other" => Ok(Category::Other),
            _ => Err(Error::InvalidArgument(format!(
                "invalid category '{}': must be work, personal, study, health, or other",
                s
            ))),
        }
    }
}

/// Fixed priority set for tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities in display order.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(Error::InvalidArgument(format!(
                "invalid priority '{}': must be high, medium, or low",
                s
            ))),
        }
    }
}

/// A single task record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Dense sequential id, reassigned to 1..N after every delete.
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    /// Serialized as `null` when absent.
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: NaiveDate,
}

impl Task {
    /// Compact one-line summary used by list output.
    pub fn summary(&self) -> String {
        let status = if self.completed { "done" } else { "open" };
        let due = self
            .due_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "no due date".to_string());
        format!(
            "#{} [{}] {} ({}/{}, due: {})",
            self.id, status, self.title, self.category, self.priority, due
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().expect("parse");
            assert_eq!(parsed, category);
        }
        assert_eq!("WORK".parse::<Category>().expect("parse"), Category::Work);
        assert!("chores".parse::<Category>().is_err());
    }

    #[test]
    fn priority_round_trips_through_str() {
        for priority in Priority::ALL {
            let parsed: Priority = priority.as_str().parse().expect("parse");
            assert_eq!(parsed, priority);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn task_serializes_with_stable_field_order() {
        let task = Task {
            id: 1,
            title: "Buy milk".to_string(),
            description: String::new(),
            category: Category::Work,
            priority: Priority::High,
            due_date: None,
            completed: false,
            created_at: NaiveDate::from_ymd_opt(2026, 8, 23).expect("date"),
        };
        let json = serde_json::to_string_pretty(&task).expect("serialize");
        assert!(json.contains("\"due_date\": null"));
        assert!(json.contains("\"category\": \"Work\""));
        assert!(json.contains("\"priority\": \"High\""));
        assert!(json.contains("\"created_at\": \"2026-08-23\""));

        let id_pos = json.find("\"id\"").expect("id");
        let title_pos = json.find("\"title\"").expect("title");
        let created_pos = json.find("\"created_at\"").expect("created_at");
        assert!(id_pos < title_pos && title_pos < created_pos);
    }

    #[test]
    fn task_deserializes_due_date_null() {
        let json = r#"{
            "id": 2,
            "title": "Call dentist",
            "description": "ask about friday",
            "category": "Health",
            "priority": "Medium",
            "due_date": null,
            "completed": false,
            "created_at": "2026-08-20"
        }"#;
        let task: Task = serde_json::from_str(json).expect("deserialize");
        assert_eq!(task.id, 2);
        assert_eq!(task.category, Category::Health);
        assert!(task.due_date.is_none());
    }
}
