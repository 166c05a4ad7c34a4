//! Actions module
//!
//! Actions are organized by the family that emits them:
//! - Cloud storage lifecycle actions (requests and their outcomes)
//! - Authentication actions (only the logout outcome affects this store)

pub mod auth;
pub mod cloud_storage;

pub use auth::AuthAction;
pub use cloud_storage::CloudStorageAction;

use serde::{Deserialize, Serialize};

/// Root action enum - tagged by family
///
/// Serialized adjacently tagged (`{"type": ..., "payload": ...}`), so an
/// action log can be replayed from JSON. Unknown tags without a payload
/// decode to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    /// Cloud storage list/create/update/delete/content actions
    CloudStorage(CloudStorageAction),
    /// Authentication actions
    Auth(AuthAction),

    /// No-op action
    #[serde(other)]
    None,
}

impl From<CloudStorageAction> for Action {
    fn from(action: CloudStorageAction) -> Self {
        Action::CloudStorage(action)
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}
