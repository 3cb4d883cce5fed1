//! Command implementations

mod task;
mod theme;

pub use task::{add, clear_all, clear_completed, delete, edit, list, stats, toggle};
pub use theme::{ThemeMode, theme};
