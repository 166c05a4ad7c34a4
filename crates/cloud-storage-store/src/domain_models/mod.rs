//! Domain models
//!
//! Cloud storage entities as reported by the backend.
//! These are pure domain concepts, separate from the store state.

pub mod cloud_storage;
pub mod cloud_storage_id;
pub mod request_error;

pub use cloud_storage::{
    CloudStorage, CloudStorageContent, CredentialsType, ProviderType, StorageStatus,
};
pub use cloud_storage_id::CloudStorageId;
pub use request_error::RequestError;
