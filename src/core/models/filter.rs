//! View filter
//!
//! Selects a read-only subset of the task list. Changing the filter never
//! mutates stored data.

use serde::{Deserialize, Serialize};

use super::Task;

/// Which tasks a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every task
    #[default]
    All,
    /// Only completed tasks
    Completed,
    /// Only tasks not yet completed
    Pending,
}

impl Filter {
    /// Whether `task` belongs in a view with this filter
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Completed => write!(f, "completed"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

impl std::str::FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" | "complete" | "done" => Ok(Self::Completed),
            "pending" | "active" | "todo" => Ok(Self::Pending),
            _ => Err(format!("Invalid filter: {s}. Use: all, completed, pending")),
        }
    }
}
