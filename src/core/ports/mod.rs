//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the task store and the
//! outside world (storage backends, time).
//!
//! Implementations live in the `adapters` module.

mod id_source;
mod key_value;
mod state_sink;

pub use id_source::IdSource;
pub use key_value::{KeyValueStore, StorageError, is_valid_key};
pub use state_sink::StateSink;
