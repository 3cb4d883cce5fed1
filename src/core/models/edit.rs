//! Edit session
//!
//! At most one task is edited at a time. The buffer holds the uncommitted
//! text until it is committed or cancelled.

use super::TaskId;

/// An in-progress edit of one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Task being edited
    pub target: TaskId,
    /// Scratch text, not yet applied to the task
    pub buffer: String,
}

impl EditSession {
    /// Open a session on `target` seeded with `current_value`
    #[must_use]
    pub fn new(target: TaskId, current_value: impl Into<String>) -> Self {
        Self {
            target,
            buffer: current_value.into(),
        }
    }
}
