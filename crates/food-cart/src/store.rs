use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::effects::Effect;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Store - holds application state and manages the Redux loop
///
/// Mutations run to completion inside `dispatch`; effects come back to the
/// caller as data and are never executed here.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, pending_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer
    ///
    /// Returns the effects requested by the reducers, plus those of any
    /// follow-up actions middleware queued while handling this one.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let mut effects = self.dispatch_one(action);
        effects.extend(self.process_pending());
        effects
    }

    /// Drain actions queued through the dispatcher (e.g. by finished
    /// background tasks) and apply them.
    pub fn process_pending(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        while let Ok(action) = self.pending_rx.try_recv() {
            effects.extend(self.dispatch_one(action));
        }
        effects
    }

    fn dispatch_one(&mut self, action: Action) -> Vec<Effect> {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if !should_reduce {
            return Vec::new();
        }

        let (state, effects) = reduce(self.state.clone(), &action);
        self.state = state;
        if !effects.is_empty() {
            log::debug!("Store: {} effect(s) emitted", effects.len());
        }
        effects
    }
}
