//! Middleware system
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```
//!
//! Middleware sees every action before the reducer does. It performs the
//! side effects (API calls, timers, persistence) and reports back by
//! dispatching result actions. Returning `false` consumes the action.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;
use sci_client::{Credential, ResearchClient};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub mod keyboard;
pub mod logging;
pub mod polling;
pub mod selection;
pub mod session;
pub mod submission;
pub mod task_directory;

pub use keyboard::KeyboardMiddleware;
pub use logging::LoggingMiddleware;
pub use polling::PollingMiddleware;
pub use selection::SelectionMiddleware;
pub use session::SessionMiddleware;
pub use submission::SubmissionMiddleware;
pub use task_directory::TaskDirectoryMiddleware;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Handles actions before they reach the reducer
pub trait Middleware: Send + Sync {
    /// Returns `true` to pass the action on, `false` to consume it
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool>;
}

/// Research client plus the credential every call is made with
#[derive(Clone)]
pub struct Api {
    pub client: Arc<dyn ResearchClient>,
    pub credential: Credential,
}

impl Api {
    pub fn new(client: Arc<dyn ResearchClient>, credential: Credential) -> Self {
        Self { client, credential }
    }
}
