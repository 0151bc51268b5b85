use crate::actions::{Action, TaskDirectoryAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::{BoxFuture, Middleware};
use crate::state::AppState;

/// Logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        _state: &'a AppState,
        _dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            match action {
                // Key presses may carry typed text
                Action::KeyPressed(_) => log::trace!("Action: {:?}", action),
                Action::TaskDirectory(TaskDirectoryAction::Loaded { seq, tasks }) => {
                    log::debug!("Action: TaskDirectory(Loaded seq={} tasks={})", seq, tasks.len())
                }
                _ => log::debug!("Action: {:?}", action),
            }
            true
        })
    }
}
