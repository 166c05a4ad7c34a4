//! Request errors
//!
//! Failures reported by the collaborator that talks to the backend.
//! The store only keeps their display form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error carried by the `*Failed` actions
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("invalid request: {message}")]
    Validation { message: String },

    #[error("permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("{message}")]
    Other { message: String },
}

impl RequestError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for RequestError {
    fn from(err: anyhow::Error) -> Self {
        Self::other(format!("{:#}", err))
    }
}
