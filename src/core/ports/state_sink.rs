//! State sink port
//!
//! The single observer a store notifies after each mutation.

use std::sync::Arc;

use super::StorageError;
use crate::core::models::Snapshot;

/// Destination for write-through persistence
///
/// `load` never fails: anything missing or unreadable comes back as the
/// default value for that part of the snapshot.
pub trait StateSink: Send + Sync {
    /// Read the last persisted state
    fn load(&self) -> Snapshot;

    /// Persist the full current state
    fn store(&self, snapshot: &Snapshot) -> Result<(), StorageError>;
}

impl<T: StateSink + ?Sized> StateSink for Arc<T> {
    fn load(&self) -> Snapshot {
        (**self).load()
    }

    fn store(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        (**self).store(snapshot)
    }
}
