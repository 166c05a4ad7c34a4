use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::CloudStoragesState;

pub mod logging_middleware;

pub use logging_middleware::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// This is where the collaborators issuing the actual backend requests hook
/// in: they observe request actions and dispatch the outcome actions.
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch follow-up actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(
        &mut self,
        action: &Action,
        state: &CloudStoragesState,
        dispatcher: &Dispatcher,
    ) -> bool;
}
