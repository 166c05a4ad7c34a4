//! Cloud storage id
//!
//! Type-safe wrapper for backend cloud storage ids.

use serde::{Deserialize, Serialize};

/// Newtype wrapper for cloud storage ids, so they are never mixed up with
/// list positions or counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CloudStorageId(u64);

impl CloudStorageId {
    pub fn new(value: u64) -> Self {
        CloudStorageId(value)
    }

    /// Get the raw value (for API calls, display, serialization, etc.)
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for CloudStorageId {
    fn from(value: u64) -> Self {
        CloudStorageId(value)
    }
}

impl std::fmt::Display for CloudStorageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
