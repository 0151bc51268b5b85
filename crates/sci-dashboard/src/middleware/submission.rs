//! Submission middleware
//!
//! Validates and submits new research requests. After the backend accepts
//! one, the filter is relaxed to all statuses so the new pending task is
//! visible, which refreshes the list.

use crate::actions::{Action, StatusBarAction, SubmissionAction, TaskDirectoryAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::StatusFilter;
use crate::middleware::{Api, BoxFuture, Middleware};
use crate::state::AppState;
use sci_client::validate_industry;

const SOURCE: &str = "Research";

pub struct SubmissionMiddleware {
    api: Api,
    in_flight: bool,
}

impl SubmissionMiddleware {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            in_flight: false,
        }
    }

    fn submit(&mut self, industry: &str, dispatcher: &Dispatcher) {
        let industry = match validate_industry(industry) {
            Ok(industry) => industry,
            Err(e) => {
                dispatcher.dispatch(Action::Submission(SubmissionAction::Rejected(
                    e.user_message(),
                )));
                return;
            }
        };
        if self.in_flight {
            log::debug!("Submission: request already in flight, ignoring");
            return;
        }

        self.in_flight = true;
        dispatcher.dispatch(Action::Submission(SubmissionAction::Started));

        let industry = industry.to_string();
        let api = self.api.clone();
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            match api.client.submit_research(&api.credential, &industry).await {
                Ok(task) => {
                    log::info!("Submission: research for {} queued as {}", industry, task.task_id);
                    dispatcher.dispatch(Action::Submission(SubmissionAction::Submitted(task)));
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        format!("Research started for {}", industry),
                        SOURCE,
                    )));
                    dispatcher.dispatch(Action::TaskDirectory(TaskDirectoryAction::SetFilter(
                        StatusFilter::All,
                    )));
                }
                Err(e) => {
                    log::warn!("Submission: research for {} failed: {}", industry, e);
                    dispatcher.dispatch(Action::Submission(SubmissionAction::Failed(
                        e.user_message(),
                    )));
                }
            }
        });
    }
}

impl Middleware for SubmissionMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        _state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            match action {
                Action::Submission(SubmissionAction::Submit(industry)) => {
                    self.submit(industry, dispatcher);
                    false
                }
                Action::Submission(
                    SubmissionAction::Submitted(_) | SubmissionAction::Failed(_),
                ) => {
                    self.in_flight = false;
                    true
                }
                _ => true,
            }
        })
    }
}
