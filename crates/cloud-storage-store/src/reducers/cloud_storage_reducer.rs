//! Cloud Storage Reducer
//!
//! Handles state updates for cloud storage records using tagged CloudStorageAction.

use cloud_storage_config::UpdateStrategy;

use crate::actions::CloudStorageAction;
use crate::domain_models::CloudStorage;
use crate::state::{
    CloudStoragesQuery, CloudStoragesState, ContentLoadState, CreateState, UpdateState,
};

/// Reduce cloud storage state based on actions
///
/// Failure payloads are kept only in their display form.
pub fn reduce_cloud_storage(
    mut state: CloudStoragesState,
    action: &CloudStorageAction,
    update_strategy: UpdateStrategy,
) -> CloudStoragesState {
    match action {
        // Listing
        CloudStorageAction::Get => {
            state.initialized = false;
            state.fetching = true;
            state.count = 0;
            state.current = Vec::new();
        }

        CloudStorageAction::GetSuccess {
            array,
            count,
            query,
        } => {
            state.initialized = true;
            state.fetching = false;
            state.count = *count;
            state.getting_query = CloudStoragesQuery::default().merged(query);
            state.current = array.clone();
            log::info!(
                "Loaded {} cloud storages ({} total, page {})",
                array.len(),
                count,
                state.getting_query.page
            );
        }

        CloudStorageAction::GetFailed { error } => {
            // The last good list stays visible
            state.initialized = true;
            state.fetching = false;
            log::warn!("Failed to load cloud storages: {}", error);
        }

        // Creation
        CloudStorageAction::Create => {
            state.activities.creates = CreateState {
                attaching: true,
                id: None,
                error: String::new(),
            };
        }

        CloudStorageAction::CreateSuccess { cloud_storage_id } => {
            state.activities.creates = CreateState {
                attaching: false,
                id: Some(*cloud_storage_id),
                error: String::new(),
            };
            log::info!("Cloud storage {} created", cloud_storage_id);
        }

        CloudStorageAction::CreateFailed { error } => {
            state.activities.creates.attaching = false;
            state.activities.creates.error = error.to_string();
            log::warn!("Failed to create cloud storage: {}", error);
        }

        // Update
        CloudStorageAction::Update => {
            state.activities.updates = UpdateState {
                updating: true,
                cloud_storage_id: None,
                error: String::new(),
            };
        }

        CloudStorageAction::UpdateSuccess { cloud_storage } => {
            state.activities.updates = UpdateState {
                updating: false,
                cloud_storage_id: Some(cloud_storage.id),
                error: String::new(),
            };
            state.current = apply_update(state.current, cloud_storage, update_strategy);
            log::info!("Cloud storage {} updated", cloud_storage.id);
        }

        CloudStorageAction::UpdateFailed { error } => {
            state.activities.updates.updating = false;
            state.activities.updates.error = error.to_string();
            log::warn!("Failed to update cloud storage: {}", error);
        }

        // Deletion
        CloudStorageAction::Delete { cloud_storage_id } => {
            state.activities.deletes.insert(*cloud_storage_id, false);
            log::debug!("Deleting cloud storage {}", cloud_storage_id);
        }

        CloudStorageAction::DeleteSuccess { cloud_storage_id } => {
            state.activities.deletes.insert(*cloud_storage_id, true);
            log::info!("Cloud storage {} deleted", cloud_storage_id);
        }

        CloudStorageAction::DeleteFailed {
            cloud_storage_id,
            error,
        } => {
            state.activities.deletes.remove(cloud_storage_id);
            log::warn!(
                "Failed to delete cloud storage {}: {}",
                cloud_storage_id,
                error
            );
        }

        // Content browsing
        CloudStorageAction::LoadContent { cloud_storage_id } => {
            state.activities.content_loads = ContentLoadState {
                cloud_storage_id: None,
                content: None,
                initialized: false,
                fetching: true,
            };
            log::debug!("Loading content of cloud storage {}", cloud_storage_id);
        }

        CloudStorageAction::LoadContentSuccess {
            cloud_storage_id,
            content,
        } => {
            state.activities.content_loads = ContentLoadState {
                cloud_storage_id: Some(*cloud_storage_id),
                content: Some(content.clone()),
                initialized: true,
                fetching: false,
            };
            log::debug!(
                "Loaded {} entries of cloud storage {}",
                content.len(),
                cloud_storage_id
            );
        }

        CloudStorageAction::LoadContentFailed {
            cloud_storage_id,
            error,
        } => {
            state.activities.content_loads.initialized = true;
            state.activities.content_loads.fetching = false;
            log::warn!(
                "Failed to load content of cloud storage {}: {}",
                cloud_storage_id,
                error
            );
        }
    }

    state
}

/// Fold an updated record into the listed records
fn apply_update(
    mut current: Vec<CloudStorage>,
    updated: &CloudStorage,
    strategy: UpdateStrategy,
) -> Vec<CloudStorage> {
    match strategy {
        UpdateStrategy::ReplaceList => vec![updated.clone()],
        UpdateStrategy::MergeById => {
            match current.iter_mut().find(|storage| storage.id == updated.id) {
                Some(storage) => *storage = updated.clone(),
                None => log::debug!(
                    "Updated cloud storage {} is not listed, keeping list as is",
                    updated.id
                ),
            }
            current
        }
    }
}
