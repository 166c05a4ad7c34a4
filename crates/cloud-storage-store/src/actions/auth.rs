//! Authentication actions
//!
//! Emitted by the authentication subsystem. Only `LogoutSuccess` changes the
//! cloud storage state; the rest pass through untouched.

use serde::{Deserialize, Serialize};

use crate::domain_models::RequestError;

/// Actions for the authentication lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum AuthAction {
    /// Login succeeded for the given user
    LoginSuccess { username: String },
    /// Login failed
    LoginFailed { error: RequestError },
    /// Logout requested
    Logout,
    /// Logout completed, all user scoped state must be dropped
    LogoutSuccess,
    /// Logout failed
    LogoutFailed { error: RequestError },
}
