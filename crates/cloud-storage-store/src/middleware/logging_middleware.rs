use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::CloudStoragesState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(
        &mut self,
        action: &Action,
        _state: &CloudStoragesState,
        _dispatcher: &Dispatcher,
    ) -> bool {
        // Skip None to reduce noise
        if !matches!(action, Action::None) {
            log::debug!("Action: {:?}", action);
        }

        true // Always pass action through
    }
}
