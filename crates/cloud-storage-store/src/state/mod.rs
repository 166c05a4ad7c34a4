//! Store State Module
//!
//! Contains the state types of the cloud storage store, organized by concern.

mod activities;
mod cloud_storages;
mod query;

pub use activities::{
    CloudStorageActivities, ContentLoadState, CreateState, DeleteStatus, UpdateState,
};
pub use cloud_storages::CloudStoragesState;
pub use query::{CloudStoragesFilter, CloudStoragesQuery, CloudStoragesQueryPatch};
