//! Aggregate statistics over a task listing.
//!
//! Pure functions over an already-fetched listing; nothing here touches
//! storage. The caller hands in the same rows "list all tasks" returned.

use crate::libs::task::{Priority, Task};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    /// Count per priority level; all three levels are always present.
    pub by_priority: HashMap<Priority, usize>,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut by_priority: HashMap<Priority, usize> =
            HashMap::from([(Priority::Low, 0), (Priority::Medium, 0), (Priority::High, 0)]);

        let mut completed = 0;
        for task in tasks {
            if task.completed {
                completed += 1;
            }
            *by_priority.entry(task.priority).or_insert(0) += 1;
        }

        TaskStats {
            total: tasks.len(),
            completed,
            by_priority,
        }
    }

    pub fn pending(&self) -> usize {
        self.total - self.completed
    }

    /// Completion rate in percent. `None` when there are no tasks, so no
    /// division happens on an empty agenda.
    pub fn completion_percent(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.completed as f64 / self.total as f64 * 100.0)
        }
    }
}
