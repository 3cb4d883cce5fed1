//! Key-value store port
//!
//! Defines the byte-level storage the task list and theme flag are
//! persisted into. Keys are short identifiers such as `todos`.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Errors raised by persistence backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed
    #[error("io error at {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Original error
        #[source]
        source: std::io::Error,
    },

    /// State could not be serialized
    #[error("failed to encode {key}: {source}")]
    Encode {
        /// Key being written
        key: String,
        /// Original error
        #[source]
        source: serde_json::Error,
    },

    /// Key contains characters the backend cannot store
    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    /// Backend lock was poisoned by a panicking writer
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Byte-level key-value storage
///
/// Implementations decide where bytes live (files, memory). Callers treat
/// `Ok(None)` and undecodable bytes the same way: as "nothing stored".
pub trait KeyValueStore: Send + Sync {
    /// Read the bytes stored under `key`, if any
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store `bytes` under `key`, replacing any previous value
    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).save(key, bytes)
    }
}

/// Returns true when `key` is safe to use with every backend.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
