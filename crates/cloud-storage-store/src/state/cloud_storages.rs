//! Cloud Storages State

use serde::{Deserialize, Serialize};

use super::{CloudStorageActivities, CloudStoragesFilter, CloudStoragesQuery, DeleteStatus};
use crate::domain_models::{CloudStorage, CloudStorageId};

/// Root state of the cloud storage store
///
/// Every field has a defined default, `CloudStoragesState::default()` is the
/// state before the first action and after a logout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudStoragesState {
    /// Set once the first list request completed (success or failure)
    pub initialized: bool,
    /// A list request is in flight
    pub fetching: bool,
    /// Total number of matching records reported by the last successful list
    pub count: usize,
    /// Records of the last successful list
    pub current: Vec<CloudStorage>,
    pub getting_list: CloudStoragesFilter,
    pub getting_query: CloudStoragesQuery,
    pub activities: CloudStorageActivities,
}

impl CloudStoragesState {
    /// Find a listed record by id
    pub fn find(&self, id: CloudStorageId) -> Option<&CloudStorage> {
        self.current.iter().find(|storage| storage.id == id)
    }

    pub fn delete_status(&self, id: CloudStorageId) -> DeleteStatus {
        self.activities.delete_status(id)
    }

    /// Ids whose delete request has not completed yet
    pub fn pending_deletes(&self) -> Vec<CloudStorageId> {
        self.activities.pending_deletes().collect()
    }

    /// True while a list, create, update or content request is in flight
    pub fn is_busy(&self) -> bool {
        self.fetching
            || self.activities.creates.attaching
            || self.activities.updates.updating
            || self.activities.content_loads.fetching
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::ProviderType;

    #[test]
    fn test_default_state_is_fully_formed() {
        let state = CloudStoragesState::default();
        assert!(!state.initialized);
        assert!(!state.fetching);
        assert_eq!(state.count, 0);
        assert!(state.current.is_empty());
        assert_eq!(state.getting_query.page, 1);
        assert_eq!(state.getting_list, CloudStoragesFilter::default());
        assert!(!state.activities.creates.attaching);
        assert!(state.activities.creates.error.is_empty());
        assert!(state.activities.deletes.is_empty());
        assert!(state.activities.content_loads.content.is_none());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_delete_status_lookup() {
        let mut state = CloudStoragesState::default();
        state.activities.deletes.insert(CloudStorageId::new(1), false);
        state.activities.deletes.insert(CloudStorageId::new(2), true);

        assert_eq!(state.delete_status(CloudStorageId::new(1)), DeleteStatus::InProgress);
        assert_eq!(state.delete_status(CloudStorageId::new(2)), DeleteStatus::Deleted);
        assert_eq!(state.delete_status(CloudStorageId::new(3)), DeleteStatus::NotAttempted);
        assert_eq!(state.pending_deletes(), vec![CloudStorageId::new(1)]);
    }

    #[test]
    fn test_find_listed_record() {
        let mut state = CloudStoragesState::default();
        state.current = vec![
            CloudStorage::new(4u64, "raw", ProviderType::AwsS3Bucket, "raw-bucket"),
            CloudStorage::new(9u64, "curated", ProviderType::AzureContainer, "curated"),
        ];

        assert_eq!(
            state.find(CloudStorageId::new(9)).map(|s| s.display_name.as_str()),
            Some("curated")
        );
        assert!(state.find(CloudStorageId::new(5)).is_none());
    }
}
