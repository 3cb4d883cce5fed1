//! Key-value backed state sink
//!
//! Maps a [`Snapshot`] onto two independent entries:
//!
//! ```text
//! todos     -> [{"id": 1700000000000, "value": "Buy milk", "completed": false}]
//! darkMode  -> true
//! ```
//!
//! Each entry decodes on its own, so a corrupt task list does not reset the
//! theme and vice versa.

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::models::Snapshot;
use crate::core::ports::{KeyValueStore, StateSink, StorageError};

/// Key holding the serialized task list
pub const TODOS_KEY: &str = "todos";

/// Key holding the serialized theme flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// State sink writing JSON into a [`KeyValueStore`]
#[derive(Debug)]
pub struct KvStateSink<K> {
    kv: K,
}

impl<K: KeyValueStore> KvStateSink<K> {
    /// Wrap a key-value backend
    pub const fn new(kv: K) -> Self {
        Self { kv }
    }

    /// The wrapped backend
    pub const fn backend(&self) -> &K {
        &self.kv
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.kv.load(key) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|err| {
                warn!("Ignoring malformed {key} payload: {err}");
                T::default()
            }),
            Ok(None) => {
                debug!("No stored {key}, using default");
                T::default()
            },
            Err(err) => {
                warn!("Could not read {key}: {err}");
                T::default()
            },
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.kv.save(key, &bytes)
    }
}

impl<K: KeyValueStore> StateSink for KvStateSink<K> {
    fn load(&self) -> Snapshot {
        Snapshot {
            tasks: self.read_or_default(TODOS_KEY),
            dark_mode: self.read_or_default(DARK_MODE_KEY),
        }
    }

    fn store(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        // Attempt both keys even if the first fails.
        let tasks = self.write(TODOS_KEY, &snapshot.tasks);
        let theme = self.write(DARK_MODE_KEY, &snapshot.dark_mode);
        tasks.and(theme)
    }
}
