//! Redux-style store
//!
//! Holds the application state. Every action runs through the middleware
//! chain first; unless a middleware consumes it, the pure reducer then
//! produces the next state.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::reduce;
use crate::state::AppState;

pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
        }
    }

    /// Add middleware; middleware runs in the order it was added
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action through the middleware chain, then the reducer
    pub async fn dispatch(&mut self, action: Action, dispatcher: &Dispatcher) {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, dispatcher).await {
                return;
            }
        }

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &action);
    }
}
