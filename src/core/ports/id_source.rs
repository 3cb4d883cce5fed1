//! Id source port

use crate::core::models::TaskId;

/// Produces candidate task ids
///
/// Values are expected to grow with wall-clock time but may repeat; the
/// store bumps any candidate that would collide.
pub trait IdSource: Send + Sync {
    /// Next candidate id
    fn next_id(&self) -> TaskId;
}
