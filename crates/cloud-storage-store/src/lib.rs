//! State store for cloud storage records
//!
//! Folds cloud storage lifecycle actions (list, create, update, delete,
//! content browsing) and authentication actions into a single
//! `CloudStoragesState` snapshot.
//!
//! - `reducer` / `reducers`: pure state transitions
//! - `store`: the state holder with its middleware chain
//! - `middleware` / `dispatcher`: hooks for side effects and follow-up actions

pub mod actions;
pub mod dispatcher;
pub mod domain_models;
pub mod middleware;
pub mod reducer;
pub mod reducers;
pub mod state;
pub mod store;

pub use cloud_storage_config::UpdateStrategy;

pub use actions::{Action, AuthAction, CloudStorageAction};
pub use dispatcher::Dispatcher;
pub use domain_models::{
    CloudStorage, CloudStorageContent, CloudStorageId, CredentialsType, ProviderType,
    RequestError, StorageStatus,
};
pub use middleware::{LoggingMiddleware, Middleware};
pub use reducer::{reduce, reduce_with};
pub use state::{CloudStoragesState, DeleteStatus};
pub use store::Store;
