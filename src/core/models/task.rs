//! Task model
//!
//! A task is one to-do entry: an id, a text label and a completion flag.
//! The serialized shape is the persisted wire format, so field names here
//! must not change.

use serde::{Deserialize, Serialize};

/// Task identifier (wall-clock derived, unique within a list)
pub type TaskId = i64;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Text label, stored as typed
    pub value: String,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new pending task
    #[must_use]
    pub fn new(id: TaskId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            completed: false,
        }
    }

    /// Whether the task is still open
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        !self.completed
    }
}

/// Returns true when `text` is acceptable as a task label.
///
/// Only emptiness is checked; surrounding whitespace is preserved on store.
#[must_use]
pub fn is_valid_label(text: &str) -> bool {
    !text.trim().is_empty()
}
