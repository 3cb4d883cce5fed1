//! In-memory key-value storage
//!
//! Used for ephemeral sessions and as the fake backend in tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::core::ports::{KeyValueStore, StorageError, is_valid_key};

/// Key-value store held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryKeyValueStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Vec<u8>>,
    {
        Self {
            entries: Mutex::new(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Raw bytes under `key`, as UTF-8 text
    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.lock()
            .ok()?
            .get(key)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, StorageError> {
        self.entries.lock().map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        if !is_valid_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        self.lock()?.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
