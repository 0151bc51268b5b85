//! Task directory middleware
//!
//! Fetches the task list, cancels tasks and triggers scheduled runs. Every
//! fetch gets a fresh sequence number so the reducer can drop responses
//! that were overtaken by a newer fetch.

use crate::actions::{Action, StatusBarAction, TaskDirectoryAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{RequestSequence, StatusFilter};
use crate::middleware::{Api, BoxFuture, Middleware};
use crate::state::AppState;
use sci_client::ListTasksQuery;

const SOURCE: &str = "Tasks";

pub struct TaskDirectoryMiddleware {
    api: Api,
    cancel_reason: String,
    sequence: RequestSequence,
}

impl TaskDirectoryMiddleware {
    pub fn new(api: Api, cancel_reason: impl Into<String>) -> Self {
        Self {
            api,
            cancel_reason: cancel_reason.into(),
            sequence: RequestSequence::default(),
        }
    }

    /// Issue a list fetch for `filter`, superseding any in flight
    fn fetch(&mut self, filter: StatusFilter, limit: u32, dispatcher: &Dispatcher) {
        let seq = self.sequence.issue();
        dispatcher.dispatch(Action::TaskDirectory(TaskDirectoryAction::LoadStart { seq }));

        let api = self.api.clone();
        let dispatcher = dispatcher.clone();
        let query = ListTasksQuery::new(filter.status(), limit);

        tokio::spawn(async move {
            let result = match api.client.list_tasks(&api.credential, &query).await {
                Ok(tasks) => {
                    log::debug!("TaskDirectory: fetch #{} returned {} tasks", seq, tasks.len());
                    TaskDirectoryAction::Loaded { seq, tasks }
                }
                Err(e) => {
                    log::warn!("TaskDirectory: fetch #{} failed: {}", seq, e);
                    TaskDirectoryAction::LoadError {
                        seq,
                        error: e.user_message(),
                        unauthorized: e.is_unauthorized(),
                    }
                }
            };
            dispatcher.dispatch(Action::TaskDirectory(result));
        });
    }

    fn cancel_highlighted(&self, state: &AppState, dispatcher: &Dispatcher) {
        let Some(task) = state.task_directory.task_at_cursor() else {
            return;
        };

        if !task.status.is_active() {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                format!("Cannot cancel a {} task", task.status.label().to_lowercase()),
                SOURCE,
            )));
            return;
        }

        let task_id = task.task_id.clone();
        let reason = self.cancel_reason.clone();
        let api = self.api.clone();
        let dispatcher = dispatcher.clone();

        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Cancelling {}...", task.industry),
            SOURCE,
        )));

        tokio::spawn(async move {
            let reason = Some(reason.as_str()).filter(|r| !r.is_empty());
            match api.client.cancel_task(&api.credential, &task_id, reason).await {
                Ok(ack) => {
                    log::info!("TaskDirectory: cancelled {}", task_id);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        ack.message.clone(),
                        SOURCE,
                    )));
                    dispatcher.dispatch(Action::TaskDirectory(TaskDirectoryAction::Cancelled {
                        task_id,
                        message: ack.message,
                    }));
                    dispatcher.dispatch(Action::TaskDirectory(TaskDirectoryAction::Refresh));
                }
                Err(e) => {
                    log::warn!("TaskDirectory: cancelling {} failed: {}", task_id, e);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        format!("Cancel failed: {}", e.user_message()),
                        SOURCE,
                    )));
                }
            }
        });
    }

    fn run_scheduled(&self, dispatcher: &Dispatcher) {
        let api = self.api.clone();
        let dispatcher = dispatcher.clone();

        tokio::spawn(async move {
            match api.client.trigger_scheduled_research(&api.credential).await {
                Ok(ack) => {
                    log::info!("TaskDirectory: scheduled run started as {}", ack.task_id);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        ack.message,
                        SOURCE,
                    )));
                    dispatcher.dispatch(Action::TaskDirectory(TaskDirectoryAction::Refresh));
                }
                Err(e) => {
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        format!("Scheduled run failed: {}", e.user_message()),
                        SOURCE,
                    )));
                }
            }
        });
    }
}

impl Middleware for TaskDirectoryMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            let Action::TaskDirectory(action) = action else {
                return true;
            };

            let limit = state.task_directory.limit;
            match action {
                TaskDirectoryAction::Refresh => {
                    self.fetch(state.task_directory.filter, limit, dispatcher);
                }
                TaskDirectoryAction::SetFilter(filter) => {
                    self.fetch(*filter, limit, dispatcher);
                }
                TaskDirectoryAction::CancelHighlighted => {
                    self.cancel_highlighted(state, dispatcher);
                }
                TaskDirectoryAction::RunScheduled => {
                    self.run_scheduled(dispatcher);
                }
                _ => {}
            }
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::actions::{Action, TaskDirectoryAction};
    use crate::domain_models::StatusFilter;
    use crate::state::AppState;
    use crate::test_support::{task, Harness, MockResearchClient};
    use pretty_assertions::assert_eq;
    use sci_client::{ApiError, ListTasksQuery, TaskStatus};

    fn state(filter: StatusFilter) -> AppState {
        let mut state = AppState::default();
        state.task_directory.filter = filter;
        state
    }

    fn ids(state: &AppState) -> Vec<&str> {
        state
            .task_directory
            .tasks
            .iter()
            .map(|t| t.task_id.as_str())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_requests_active_filter_and_limit() {
        let mock = MockResearchClient::new(vec![
            task("a", TaskStatus::Completed),
            task("b", TaskStatus::Failed),
        ]);
        let mut harness = Harness::new(
            &mock,
            state(StatusFilter::Only(TaskStatus::Completed)),
        );

        harness
            .dispatch(Action::TaskDirectory(TaskDirectoryAction::Refresh))
            .await;

        assert_eq!(
            mock.list_queries(),
            vec![ListTasksQuery::new(Some(TaskStatus::Completed), 100)]
        );
        assert_eq!(ids(harness.state()), vec!["a"]);
        assert!(!harness.state().task_directory.loading);
        assert!(harness.state().task_directory.last_updated.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_never_shows_tasks_outside_filter() {
        let mock = MockResearchClient::new(vec![
            task("a", TaskStatus::Completed),
            task("b", TaskStatus::Pending),
            task("c", TaskStatus::Completed),
        ]);
        // Backend ignores the status parameter
        mock.ignore_status_query();
        let mut harness = Harness::new(
            &mock,
            state(StatusFilter::Only(TaskStatus::Completed)),
        );

        harness
            .dispatch(Action::TaskDirectory(TaskDirectoryAction::Refresh))
            .await;

        assert_eq!(ids(harness.state()), vec!["a", "c"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_filter_refetches_with_new_filter() {
        let mock = MockResearchClient::new(vec![
            task("a", TaskStatus::Completed),
            task("b", TaskStatus::Failed),
        ]);
        let mut harness = Harness::new(
            &mock,
            state(StatusFilter::Only(TaskStatus::Completed)),
        );

        harness
            .dispatch(Action::TaskDirectory(TaskDirectoryAction::SetFilter(
                StatusFilter::Only(TaskStatus::Failed),
            )))
            .await;

        assert_eq!(
            harness.state().task_directory.filter,
            StatusFilter::Only(TaskStatus::Failed)
        );
        assert_eq!(ids(harness.state()), vec!["b"]);
        assert_eq!(mock.calls("list_tasks"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_filter_changes_apply_only_latest() {
        let mock = MockResearchClient::new(vec![
            task("a", TaskStatus::Completed),
            task("b", TaskStatus::Failed),
            task("c", TaskStatus::Cancelled),
        ]);
        let mut harness = Harness::new(&mock, state(StatusFilter::All));

        for filter in [
            StatusFilter::Only(TaskStatus::Completed),
            StatusFilter::Only(TaskStatus::Failed),
            StatusFilter::Only(TaskStatus::Cancelled),
        ] {
            harness
                .dispatch_now(Action::TaskDirectory(TaskDirectoryAction::SetFilter(filter)))
                .await;
        }
        harness.settle().await;

        assert_eq!(mock.calls("list_tasks"), 3);
        assert_eq!(ids(harness.state()), vec!["c"]);
        assert_eq!(harness.state().task_directory.latest_seq, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_refresh_keeps_previous_tasks() {
        let mock = MockResearchClient::new(vec![task("a", TaskStatus::Completed)]);
        let mut harness = Harness::new(&mock, state(StatusFilter::All));

        harness
            .dispatch(Action::TaskDirectory(TaskDirectoryAction::Refresh))
            .await;
        assert_eq!(ids(harness.state()), vec!["a"]);

        mock.fail_list(Some(ApiError::Transport("connection refused".to_string())));
        harness
            .dispatch(Action::TaskDirectory(TaskDirectoryAction::Refresh))
            .await;

        let directory = &harness.state().task_directory;
        assert_eq!(ids(harness.state()), vec!["a"]);
        assert_eq!(
            directory.error.as_deref(),
            Some("Failed to fetch: connection refused")
        );
        assert!(!directory.loading);

        // Next successful refresh clears the error
        mock.fail_list(None);
        harness
            .dispatch(Action::TaskDirectory(TaskDirectoryAction::Refresh))
            .await;
        assert!(harness.state().task_directory.error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_highlighted_active_task() {
        let mock = MockResearchClient::new(vec![task("a", TaskStatus::Processing)]);
        let mut harness = Harness::new(&mock, state(StatusFilter::All));
        harness
            .dispatch(Action::TaskDirectory(TaskDirectoryAction::Refresh))
            .await;

        harness
            .dispatch(Action::TaskDirectory(TaskDirectoryAction::CancelHighlighted))
            .await;

        assert_eq!(mock.calls("cancel_task"), 1);
        assert_eq!(
            harness.state().task_directory.tasks[0].status,
            TaskStatus::Cancelled
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_terminal_task_is_refused_locally() {
        let mock = MockResearchClient::new(vec![task("a", TaskStatus::Completed)]);
        let mut harness = Harness::new(&mock, state(StatusFilter::All));
        harness
            .dispatch(Action::TaskDirectory(TaskDirectoryAction::Refresh))
            .await;

        harness
            .dispatch(Action::TaskDirectory(TaskDirectoryAction::CancelHighlighted))
            .await;

        assert_eq!(mock.calls("cancel_task"), 0);
        let latest = harness.state().status_bar.latest().map(|m| m.message.clone());
        assert_eq!(latest.as_deref(), Some("Cannot cancel a completed task"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_scheduled_refreshes() {
        let mock = MockResearchClient::new(vec![]);
        let mut harness = Harness::new(&mock, state(StatusFilter::All));

        harness
            .dispatch(Action::TaskDirectory(TaskDirectoryAction::RunScheduled))
            .await;

        assert_eq!(mock.calls("trigger_scheduled_research"), 1);
        assert_eq!(mock.calls("list_tasks"), 1);
    }
}
