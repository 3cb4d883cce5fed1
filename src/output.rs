//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Filter, Stats, Task, TaskId};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Information about a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskInfo {
    /// Task ID
    pub id: TaskId,
    /// Task text
    pub value: String,
    /// Completion flag
    pub completed: bool,
}

impl From<&Task> for TaskInfo {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            value: task.value.clone(),
            completed: task.completed,
        }
    }
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct TaskListResult {
    /// Filter the tasks were selected with
    pub filter: Filter,
    /// Tasks in display order
    pub tasks: Vec<TaskInfo>,
    /// Counts over the whole list
    pub stats: Stats,
}

/// Result of a stats operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsResult {
    /// Counts over the whole list
    #[serde(flatten)]
    pub stats: Stats,
}

/// Result of a theme operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThemeResult {
    /// Whether dark mode is on
    pub dark_mode: bool,
}

/// Result of a task mutation
#[derive(Debug, Serialize)]
pub struct TaskActionResult {
    /// Whether the mutation took effect
    pub success: bool,
    /// What was attempted (e.g. "add", "toggle")
    pub action: &'static str,
    /// Task involved, when it exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskInfo>,
    /// Human-readable message
    pub message: String,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl TaskInfo {
    /// One display line: checkbox, id, text
    #[must_use]
    pub fn format_line(&self) -> String {
        if self.completed {
            format!("[x] {}  {}", self.id, self.value.strikethrough().dimmed())
        } else {
            format!("[ ] {}  {}", self.id, self.value)
        }
    }
}

impl TaskListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.format_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn format_human(&self) -> String {
        let mut out = String::new();
        if self.tasks.is_empty() {
            out.push_str("Nothing here\n");
        } else {
            for task in &self.tasks {
                out.push_str(&task.format_line());
                out.push('\n');
            }
        }
        out.push('\n');
        out.push_str(&format_stats(&self.stats));
        out.push('\n');
        out
    }
}

/// `Total: N  Completed: N  Pending: N`
#[must_use]
pub fn format_stats(stats: &Stats) -> String {
    format!(
        "Total: {}  Completed: {}  Pending: {}",
        stats.total,
        stats.completed.to_string().green(),
        stats.pending.to_string().red()
    )
}

impl StatsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", format_stats(&self.stats)),
            OutputMode::Json => print_json(self),
        }
    }
}

impl ThemeResult {
    /// Theme name
    #[must_use]
    pub const fn name(self) -> &'static str {
        if self.dark_mode { "dark" } else { "light" }
    }

    /// Render the result based on output mode
    pub fn render(self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("Theme: {}", self.name()),
            OutputMode::Json => print_json(&self),
        }
    }
}

impl TaskActionResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}", self.message);
                if let Some(task) = &self.task {
                    println!("  {}", task.format_line());
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
