//! Session middleware
//!
//! Remembers the status filter across runs by saving it on quit.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::{BoxFuture, Middleware};
use crate::state::AppState;
use sci_config::Session;
use std::path::PathBuf;

pub struct SessionMiddleware {
    path: PathBuf,
}

impl SessionMiddleware {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn save_filter(&self, state: &AppState) -> anyhow::Result<()> {
        // Never replace an unreadable session, it may hold the credential
        let mut session = if self.path.exists() {
            Session::load_from_path(&self.path)?
        } else {
            Session::default()
        };
        session.set_status_filter(state.task_directory.filter.as_config_str());
        session.save_to_path(&self.path)
    }
}

impl Middleware for SessionMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        _dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            if let Action::Global(GlobalAction::Quit) = action {
                if let Err(e) = self.save_filter(state) {
                    log::error!("Failed to save session: {:#}", e);
                }
            }
            true
        })
    }
}
