//! Aggregate statistics over the task list.

use serde::Serialize;

use crate::task::{Category, Priority, Task};

/// Count of tasks in one category.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Count of tasks with one priority.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: usize,
}

/// Statistics bundle for the whole list.
///
/// `by_category` and `by_priority` always carry every enum member in
/// declaration order, zero-filled, so consumers never need to handle
/// missing keys.
#[derive(Debug, Clone, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub incomplete: usize,
    /// Percent in `[0, 100]`; exactly 0 when `total == 0`.
    pub completion_rate: f64,
    pub by_category: Vec<CategoryCount>,
    pub by_priority: Vec<PriorityCount>,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        let incomplete = total - completed;
        let completion_rate = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };

        let by_category = Category::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: tasks.iter().filter(|task| task.category == category).count(),
            })
            .collect();
        let by_priority = Priority::ALL
            .iter()
            .map(|&priority| PriorityCount {
                priority,
                count: tasks.iter().filter(|task| task.priority == priority).count(),
            })
            .collect();

        Self {
            total,
            completed,
            incomplete,
            completion_rate,
            by_category,
            by_priority,
        }
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.by_category
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    pub fn priority_count(&self, priority: Priority) -> usize {
        self.by_priority
            .iter()
            .find(|entry| entry.priority == priority)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(id: u32, category: Category, priority: Priority, completed: bool) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: String::new(),
            category,
            priority,
            due_date: None,
            completed,
            created_at: NaiveDate::from_ymd_opt(2026, 8, 23).expect("date"),
        }
    }

    #[test]
    fn empty_list_has_zero_rate() {
        let stats = TaskStats::from_tasks(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.by_category.len(), 5);
        assert_eq!(stats.by_priority.len(), 3);
        assert!(stats.by_category.iter().all(|entry| entry.count == 0));
    }

    #[test]
    fn three_tasks_one_completed() {
        let tasks = vec![
            task(1, Category::Work, Priority::High, true),
            task(2, Category::Work, Priority::Medium, false),
            task(3, Category::Health, Priority::Medium, false),
        ];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.incomplete, 2);
        assert!((stats.completion_rate - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.category_count(Category::Work), 2);
        assert_eq!(stats.category_count(Category::Health), 1);
        assert_eq!(stats.category_count(Category::Study), 0);
        assert_eq!(stats.priority_count(Priority::Medium), 2);
        assert_eq!(stats.priority_count(Priority::Low), 0);
    }

    #[test]
    fn completion_rate_stays_within_bounds() {
        let all_done: Vec<Task> = (1..=4)
            .map(|id| task(id, Category::Other, Priority::Low, true))
            .collect();
        let stats = TaskStats::from_tasks(&all_done);
        assert_eq!(stats.completion_rate, 100.0);
        assert_eq!(stats.incomplete, 0);
    }
}
