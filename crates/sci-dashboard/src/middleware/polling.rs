//! Polling middleware
//!
//! Watches applied task list results and keeps the refresh timer running
//! exactly while the visible list has pending or processing tasks. The
//! timer itself lives in [`PollingController`].

use crate::actions::{Action, GlobalAction, PollingAction, TaskDirectoryAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{PollingController, PollingPhase};
use crate::middleware::{BoxFuture, Middleware};
use crate::state::AppState;
use std::time::Duration;

pub struct PollingMiddleware {
    controller: PollingController,
}

impl PollingMiddleware {
    pub fn new(interval: Duration) -> Self {
        Self {
            controller: PollingController::new(interval),
        }
    }

    fn observe(&mut self, has_active_tasks: bool, dispatcher: &Dispatcher) {
        let ticker = dispatcher.clone();
        let on_tick = move || ticker.dispatch(Action::TaskDirectory(TaskDirectoryAction::Refresh));

        if let Some(phase) = self.controller.observe(has_active_tasks, on_tick) {
            dispatcher.dispatch(Action::Polling(match phase {
                PollingPhase::Polling => PollingAction::Started,
                PollingPhase::Idle => PollingAction::Stopped,
            }));
        }
    }
}

impl Middleware for PollingMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            let directory = &state.task_directory;
            match action {
                // Only results the reducer is about to apply count
                Action::TaskDirectory(TaskDirectoryAction::Loaded { seq, tasks })
                    if directory.accepts(*seq) =>
                {
                    let filter = directory.filter;
                    let has_active = tasks
                        .iter()
                        .any(|t| filter.matches(t) && t.status.is_active());
                    self.observe(has_active, dispatcher);
                }
                Action::TaskDirectory(TaskDirectoryAction::LoadError {
                    seq,
                    unauthorized: true,
                    ..
                }) if directory.accepts(*seq) => {
                    log::warn!("Polling: credential rejected, stopping refresh timer");
                    self.observe(false, dispatcher);
                }
                Action::Global(GlobalAction::Quit) => {
                    self.controller.stop();
                }
                _ => {}
            }
            true
        })
    }
}
