//! Persisted state snapshot
//!
//! The two values that survive between sessions: the task list and the
//! theme flag. The active filter and any edit session are not persisted.

use super::Task;

/// Everything written back after a mutation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Tasks in display order
    pub tasks: Vec<Task>,
    /// Dark theme enabled
    pub dark_mode: bool,
}
