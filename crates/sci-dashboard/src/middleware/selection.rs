//! Selection middleware
//!
//! Turns `Select` requests into report fetches. The tracker decides
//! whether a request selects, toggles off or is ignored, and results of
//! superseded fetches are dropped here before they reach the reducer.

use crate::actions::{Action, SelectionAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{SelectOutcome, SelectionTracker};
use crate::middleware::{Api, BoxFuture, Middleware};
use crate::state::AppState;

pub struct SelectionMiddleware {
    api: Api,
    tracker: SelectionTracker,
}

impl SelectionMiddleware {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            tracker: SelectionTracker::default(),
        }
    }

    fn fetch_report(&self, task_id: String, seq: u64, dispatcher: &Dispatcher) {
        dispatcher.dispatch(Action::Selection(SelectionAction::LoadStart {
            task_id: task_id.clone(),
            seq,
        }));

        let api = self.api.clone();
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            let result = match api.client.task_report(&api.credential, &task_id).await {
                Ok(report) => SelectionAction::Loaded {
                    task_id,
                    seq,
                    report: Box::new(report),
                },
                Err(e) => {
                    log::warn!("Selection: report of {} failed: {}", task_id, e);
                    SelectionAction::LoadError {
                        task_id,
                        seq,
                        error: e.user_message(),
                    }
                }
            };
            dispatcher.dispatch(Action::Selection(result));
        });
    }
}

impl Middleware for SelectionMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            let Action::Selection(action) = action else {
                return true;
            };

            match action {
                SelectionAction::Select(task_id) => {
                    let task = state.task_directory.task(task_id);
                    match self.tracker.select(task_id, task) {
                        SelectOutcome::Ignored => {
                            log::debug!("Selection: {} is not selectable", task_id);
                        }
                        SelectOutcome::Deselect => {
                            dispatcher.dispatch(Action::Selection(SelectionAction::Deselect));
                        }
                        SelectOutcome::Fetch { task_id, seq } => {
                            self.fetch_report(task_id, seq, dispatcher);
                        }
                    }
                    // The request itself carries no state change
                    false
                }
                SelectionAction::Deselect => {
                    self.tracker.clear();
                    true
                }
                SelectionAction::Loaded { seq, task_id, .. }
                | SelectionAction::LoadError { seq, task_id, .. }
                    if !self.tracker.is_current(*seq) =>
                {
                    log::debug!("Selection: dropping stale report #{} of {}", seq, task_id);
                    false
                }
                _ => true,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::actions::{Action, SelectionAction, TaskDirectoryAction};
    use crate::state::{AppState, ReportView};
    use crate::test_support::{report, task, Harness, MockResearchClient};
    use pretty_assertions::assert_eq;
    use sci_client::{ApiError, TaskStatus};
    use std::time::Duration;

    async fn loaded_harness(mock: &MockResearchClient) -> Harness {
        let mut harness = Harness::new(mock, AppState::default());
        harness
            .dispatch(Action::TaskDirectory(TaskDirectoryAction::Refresh))
            .await;
        harness
    }

    fn select(task_id: &str) -> Action {
        Action::Selection(SelectionAction::Select(task_id.to_string()))
    }

    fn mock() -> MockResearchClient {
        let mock = MockResearchClient::new(vec![
            task("a", TaskStatus::Completed),
            task("b", TaskStatus::Completed),
            task("p", TaskStatus::Processing),
        ]);
        mock.set_report(report("a", "Automotive"));
        mock.set_report(report("b", "Energy"));
        mock
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_completed_loads_report() {
        let mock = mock();
        let mut harness = loaded_harness(&mock).await;

        harness.dispatch(select("a")).await;

        let view = &harness.state().report_view;
        assert_eq!(view.selected_task_id(), Some("a"));
        assert_eq!(view.report().map(|r| r.industry.as_str()), Some("Automotive"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_twice_toggles_off() {
        let mock = mock();
        let mut harness = loaded_harness(&mock).await;

        harness.dispatch(select("a")).await;
        harness.dispatch(select("a")).await;

        assert_eq!(harness.state().report_view, ReportView::NoSelection);
        assert_eq!(mock.calls("task_report"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_completed_task_is_not_selectable() {
        let mock = mock();
        let mut harness = loaded_harness(&mock).await;

        harness.dispatch(select("a")).await;
        harness.dispatch(select("p")).await;
        harness.dispatch(select("unknown")).await;

        assert_eq!(harness.state().report_view.selected_task_id(), Some("a"));
        assert!(harness.state().report_view.report().is_some());
        assert_eq!(mock.calls("task_report"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switching_selection_replaces_report() {
        let mock = mock();
        let mut harness = loaded_harness(&mock).await;

        harness.dispatch(select("a")).await;
        harness.dispatch(select("b")).await;

        let view = &harness.state().report_view;
        assert_eq!(view.selected_task_id(), Some("b"));
        assert_eq!(view.report().map(|r| r.industry.as_str()), Some("Energy"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_stale_report_never_overwrites_newer_selection() {
        let mock = mock();
        mock.delay_report("a", Duration::from_millis(50));
        let mut harness = loaded_harness(&mock).await;

        harness.dispatch_now(select("a")).await;
        harness.dispatch_now(select("b")).await;
        harness.settle().await;

        assert_eq!(mock.calls("task_report"), 2);
        let view = &harness.state().report_view;
        assert_eq!(view.selected_task_id(), Some("b"));
        assert_eq!(view.report().map(|r| r.industry.as_str()), Some("Energy"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_report_failure_shows_error_without_report() {
        let mock = mock();
        mock.fail_report(
            "a",
            ApiError::Rejected {
                status: 500,
                message: "boom".to_string(),
            },
        );
        let mut harness = loaded_harness(&mock).await;

        harness.dispatch(select("a")).await;
        assert_eq!(
            harness.state().report_view,
            ReportView::Failed {
                task_id: "a".to_string(),
                error: "boom".to_string(),
            }
        );

        // Selecting another task recovers
        harness.dispatch(select("b")).await;
        assert!(harness.state().report_view.report().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deselect_while_loading_drops_result() {
        let mock = mock();
        mock.delay_report("a", Duration::from_millis(50));
        let mut harness = loaded_harness(&mock).await;

        harness.dispatch_now(select("a")).await;
        harness.dispatch_now(select("a")).await;
        harness.settle().await;

        assert_eq!(harness.state().report_view, ReportView::NoSelection);
    }
}
