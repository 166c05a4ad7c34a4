//! Activity tracking for in-flight and last completed mutations

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain_models::{CloudStorageContent, CloudStorageId};

/// In-flight/last completed operations on cloud storages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudStorageActivities {
    pub creates: CreateState,
    pub updates: UpdateState,
    /// Delete attempts: `false` while in progress, `true` once deleted.
    /// Failed deletes are removed again.
    pub deletes: BTreeMap<CloudStorageId, bool>,
    pub content_loads: ContentLoadState,
}

/// State of the last create request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateState {
    pub attaching: bool,
    /// Id of the last created storage
    pub id: Option<CloudStorageId>,
    /// Display form of the last failure, empty if none
    pub error: String,
}

/// State of the last update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateState {
    pub updating: bool,
    /// Id of the last updated storage
    pub cloud_storage_id: Option<CloudStorageId>,
    /// Display form of the last failure, empty if none
    pub error: String,
}

/// State of the last content listing request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLoadState {
    pub cloud_storage_id: Option<CloudStorageId>,
    pub content: Option<CloudStorageContent>,
    pub initialized: bool,
    pub fetching: bool,
}

/// Delete progress of a single storage, derived from `deletes`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatus {
    /// Never attempted, or the attempt failed
    NotAttempted,
    InProgress,
    Deleted,
}

impl CloudStorageActivities {
    pub fn delete_status(&self, id: CloudStorageId) -> DeleteStatus {
        match self.deletes.get(&id) {
            None => DeleteStatus::NotAttempted,
            Some(false) => DeleteStatus::InProgress,
            Some(true) => DeleteStatus::Deleted,
        }
    }

    /// Ids whose delete request has not completed yet
    pub fn pending_deletes(&self) -> impl Iterator<Item = CloudStorageId> + '_ {
        self.deletes
            .iter()
            .filter(|(_, done)| !**done)
            .map(|(id, _)| *id)
    }
}
