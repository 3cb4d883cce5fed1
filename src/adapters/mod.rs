//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - One JSON file per key under a data directory
//! - `memory` - In-process key-value map
//! - `clock` - Wall-clock task ids

pub mod clock;
pub mod file;
pub mod memory;

pub use clock::ClockIdSource;
pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
