//! Business logic services
//!
//! - [`store`] - The task list store and its operations
//! - [`persistence`] - Mapping store state onto key-value entries

pub mod persistence;
pub mod store;

pub use persistence::{DARK_MODE_KEY, KvStateSink, TODOS_KEY};
pub use store::TodoStore;
