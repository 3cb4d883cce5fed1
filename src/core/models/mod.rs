//! Domain models for todo-dash
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - One to-do entry
//! - [`Filter`] - Which tasks a view shows
//! - [`Stats`] - Counts over the list
//! - [`EditSession`] - The single in-progress edit
//! - [`Snapshot`] - What gets persisted

mod edit;
mod filter;
mod snapshot;
mod stats;
mod task;

pub use edit::EditSession;
pub use filter::Filter;
pub use snapshot::Snapshot;
pub use stats::Stats;
pub use task::{Task, TaskId, is_valid_label};
