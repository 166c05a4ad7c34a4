//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch follow-up actions, it uses the Dispatcher.
//! Actions dispatched here are queued and go through the full middleware chain
//! once the current action has been reduced.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions back into the store
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher with the action channel
    ///
    /// The receiving end is drained by the store after each dispatch.
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: impl Into<Action>) {
        if let Err(e) = self.action_tx.send(action.into()) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
