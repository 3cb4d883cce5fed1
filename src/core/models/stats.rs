//! List statistics

use serde::Serialize;

use super::Task;

/// Counts over the whole task list (independent of the active filter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    /// Number of tasks
    pub total: usize,
    /// Number of completed tasks
    pub completed: usize,
    /// Number of tasks still open
    pub pending: usize,
}

impl Stats {
    /// Compute stats for a task list
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}
