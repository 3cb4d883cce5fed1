//! Wall-clock id source

use std::sync::atomic::{AtomicI64, Ordering};

use crate::core::models::TaskId;
use crate::core::ports::IdSource;

/// Ids from milliseconds since the Unix epoch
///
/// Two calls within the same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct ClockIdSource {
    last: AtomicI64,
}

impl ClockIdSource {
    /// New source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for ClockIdSource {
    fn next_id(&self) -> TaskId {
        let now = chrono::Utc::now().timestamp_millis();
        let previous = self
            .last
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| Some(now.max(last + 1)))
            .unwrap_or(now);
        now.max(previous + 1)
    }
}
