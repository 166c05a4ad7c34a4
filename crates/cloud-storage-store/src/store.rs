use std::sync::mpsc::{self, Receiver};

use cloud_storage_config::{AppConfig, UpdateStrategy};

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::{LoggingMiddleware, Middleware};
use crate::reducer::reduce_with;
use crate::state::CloudStoragesState;

/// Store - holds the cloud storage state and runs the middleware/reducer loop
///
/// Actions are processed one at a time. Follow-up actions dispatched by
/// middleware are queued and processed in order once the current action
/// has been reduced.
pub struct Store {
    state: CloudStoragesState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
    update_strategy: UpdateStrategy,
}

impl Store {
    pub fn new(initial_state: CloudStoragesState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
            update_strategy: UpdateStrategy::default(),
        }
    }

    /// Create a store configured from the app config
    ///
    /// Installs the logging middleware when `log_actions` is set.
    pub fn with_config(initial_state: CloudStoragesState, config: &AppConfig) -> Self {
        let mut store = Self::new(initial_state);
        store.update_strategy = config.update_strategy;
        if config.log_actions {
            store.add_middleware(Box::new(LoggingMiddleware::new()));
        }
        store
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &CloudStoragesState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn update_strategy(&self) -> UpdateStrategy {
        self.update_strategy
    }

    /// Replace entire state (useful for initialization or testing)
    pub fn replace_state(&mut self, state: CloudStoragesState) {
        self.state = state;
    }

    /// Process an action through middleware chain and reducer,
    /// then everything that was dispatched meanwhile
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        self.process(action.into());

        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
        }
    }

    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            let state = std::mem::take(&mut self.state);
            self.state = reduce_with(state, &action, self.update_strategy);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(CloudStoragesState::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("middleware", &format!("{} middleware", self.middleware.len()))
            .field("update_strategy", &self.update_strategy)
            .finish()
    }
}
