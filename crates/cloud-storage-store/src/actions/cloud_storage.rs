//! Cloud storage actions
//!
//! Every operation comes as a request action, dispatched when the call is
//! issued, followed by exactly one `*Success` or `*Failed` outcome.

use serde::{Deserialize, Serialize};

use crate::domain_models::{CloudStorage, CloudStorageContent, CloudStorageId, RequestError};
use crate::state::CloudStoragesQueryPatch;

/// Actions for the cloud storage records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum CloudStorageAction {
    // Listing
    /// List request issued
    ///
    /// The effective query is reported back with `GetSuccess`.
    Get,
    /// List loaded (records of the page, total count, effective query)
    GetSuccess {
        array: Vec<CloudStorage>,
        count: usize,
        #[serde(default)]
        query: CloudStoragesQueryPatch,
    },
    /// List request failed
    GetFailed { error: RequestError },

    // Creation
    /// Create request issued
    Create,
    /// Storage created with the given id
    CreateSuccess { cloud_storage_id: CloudStorageId },
    /// Create failed
    CreateFailed { error: RequestError },

    // Update
    /// Update request issued
    Update,
    /// Storage updated, carrying the record as returned by the backend
    UpdateSuccess { cloud_storage: CloudStorage },
    /// Update failed
    UpdateFailed { error: RequestError },

    // Deletion
    /// Delete request issued for a storage
    Delete { cloud_storage_id: CloudStorageId },
    /// Storage deleted
    DeleteSuccess { cloud_storage_id: CloudStorageId },
    /// Delete failed, the storage is presumed still present
    DeleteFailed {
        cloud_storage_id: CloudStorageId,
        error: RequestError,
    },

    // Content browsing
    /// Content listing request issued for a storage
    LoadContent { cloud_storage_id: CloudStorageId },
    /// Content listing loaded
    LoadContentSuccess {
        cloud_storage_id: CloudStorageId,
        content: CloudStorageContent,
    },
    /// Content listing failed
    LoadContentFailed {
        cloud_storage_id: CloudStorageId,
        error: RequestError,
    },
}
