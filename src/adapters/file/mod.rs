//! File-based key-value storage
//!
//! Implements `KeyValueStore` with one JSON file per key.

mod store;

pub use store::FileKeyValueStore;
