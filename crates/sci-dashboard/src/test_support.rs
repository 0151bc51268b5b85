//! Test fixtures: task builders, a scripted research client and a store
//! harness that pumps the action queue like the event loop does.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::{
    Api, KeyboardMiddleware, LoggingMiddleware, PollingMiddleware, SelectionMiddleware,
    SubmissionMiddleware, TaskDirectoryMiddleware,
};
use crate::state::AppState;
use crate::store::Store;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use sci_client::{
    ApiError, ApiResult, CancelAck, Credential, ListTasksQuery, Report, ResearchClient,
    ScheduledRunAck, TaskStatus, TaskSummary,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

pub fn task(task_id: &str, status: TaskStatus) -> TaskSummary {
    TaskSummary {
        task_id: task_id.to_string(),
        task_type: Some("research".to_string()),
        industry: "Automotive".to_string(),
        status,
        progress: 0,
        created_at: Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap(),
        started_at: None,
        completed_at: None,
        error_message: None,
        duration: None,
    }
}

pub fn report(task_id: &str, industry: &str) -> Report {
    Report {
        id: Some(1),
        task_id: Some(task_id.to_string()),
        industry: industry.to_string(),
        fragility_score: 6.5,
        executive_summary: format!("Summary for {}", industry),
        critical_alerts: vec!["Port congestion".to_string()],
        risk_metrics: Vec::new(),
        sources: Vec::new(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 10, 13, 0, 0).unwrap(),
    }
}

#[derive(Default)]
struct MockInner {
    tasks: Vec<TaskSummary>,
    /// Return every task regardless of the requested status
    ignore_status_query: bool,
    list_error: Option<ApiError>,
    reports: HashMap<String, Report>,
    report_errors: HashMap<String, ApiError>,
    report_delays: HashMap<String, Duration>,
    submit_error: Option<ApiError>,
    calls: HashMap<&'static str, usize>,
    list_queries: Vec<ListTasksQuery>,
    submitted: Vec<String>,
}

/// Scripted `ResearchClient` recording every call
#[derive(Clone, Default)]
pub struct MockResearchClient {
    inner: Arc<Mutex<MockInner>>,
}

impl MockResearchClient {
    pub fn new(tasks: Vec<TaskSummary>) -> Self {
        let mock = Self::default();
        mock.set_tasks(tasks);
        mock
    }

    fn with<R>(&self, f: impl FnOnce(&mut MockInner) -> R) -> R {
        f(&mut self.inner.lock().unwrap())
    }

    fn record(&self, call: &'static str) {
        self.with(|inner| *inner.calls.entry(call).or_default() += 1);
    }

    pub fn calls(&self, call: &'static str) -> usize {
        self.with(|inner| inner.calls.get(call).copied().unwrap_or(0))
    }

    pub fn set_tasks(&self, tasks: Vec<TaskSummary>) {
        self.with(|inner| inner.tasks = tasks);
    }

    pub fn update_task(&self, task_id: &str, status: TaskStatus, progress: i32) {
        self.with(|inner| {
            if let Some(task) = inner.tasks.iter_mut().find(|t| t.task_id == task_id) {
                task.status = status;
                task.progress = progress;
            }
        });
    }

    pub fn ignore_status_query(&self) {
        self.with(|inner| inner.ignore_status_query = true);
    }

    pub fn fail_list(&self, error: Option<ApiError>) {
        self.with(|inner| inner.list_error = error);
    }

    pub fn set_report(&self, report: Report) {
        self.with(|inner| {
            let task_id = report.task_id.clone().unwrap_or_default();
            inner.reports.insert(task_id, report);
        });
    }

    pub fn fail_report(&self, task_id: &str, error: ApiError) {
        self.with(|inner| inner.report_errors.insert(task_id.to_string(), error));
    }

    pub fn delay_report(&self, task_id: &str, delay: Duration) {
        self.with(|inner| inner.report_delays.insert(task_id.to_string(), delay));
    }

    pub fn fail_submit(&self, error: Option<ApiError>) {
        self.with(|inner| inner.submit_error = error);
    }

    pub fn list_queries(&self) -> Vec<ListTasksQuery> {
        self.with(|inner| inner.list_queries.clone())
    }

    pub fn submitted(&self) -> Vec<String> {
        self.with(|inner| inner.submitted.clone())
    }
}

#[async_trait]
impl ResearchClient for MockResearchClient {
    async fn submit_research(&self, _cred: &Credential, industry: &str) -> ApiResult<TaskSummary> {
        self.record("submit_research");
        self.with(|inner| {
            if let Some(error) = inner.submit_error.clone() {
                return Err(error);
            }
            inner.submitted.push(industry.to_string());
            let mut created = task(&format!("task-{}", inner.submitted.len()), TaskStatus::Pending);
            created.industry = industry.to_string();
            inner.tasks.insert(0, created.clone());
            Ok(created)
        })
    }

    async fn list_tasks(
        &self,
        _cred: &Credential,
        query: &ListTasksQuery,
    ) -> ApiResult<Vec<TaskSummary>> {
        self.record("list_tasks");
        self.with(|inner| {
            inner.list_queries.push(*query);
            if let Some(error) = inner.list_error.clone() {
                return Err(error);
            }
            Ok(inner
                .tasks
                .iter()
                .filter(|t| inner.ignore_status_query || query.status.is_none_or(|s| t.status == s))
                .take(query.limit as usize)
                .cloned()
                .collect())
        })
    }

    async fn task_status(&self, _cred: &Credential, task_id: &str) -> ApiResult<TaskSummary> {
        self.record("task_status");
        self.with(|inner| {
            inner
                .tasks
                .iter()
                .find(|t| t.task_id == task_id)
                .cloned()
                .ok_or_else(|| ApiError::Rejected {
                    status: 404,
                    message: "Task not found".to_string(),
                })
        })
    }

    async fn task_report(&self, _cred: &Credential, task_id: &str) -> ApiResult<Report> {
        self.record("task_report");
        let delay = self.with(|inner| inner.report_delays.get(task_id).copied());
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.with(|inner| {
            if let Some(error) = inner.report_errors.get(task_id) {
                return Err(error.clone());
            }
            inner
                .reports
                .get(task_id)
                .cloned()
                .ok_or_else(|| ApiError::Rejected {
                    status: 404,
                    message: "Report not found".to_string(),
                })
        })
    }

    async fn cancel_task(
        &self,
        _cred: &Credential,
        task_id: &str,
        _reason: Option<&str>,
    ) -> ApiResult<CancelAck> {
        self.record("cancel_task");
        self.update_task(task_id, TaskStatus::Cancelled, 0);
        Ok(CancelAck {
            message: "Task cancelled".to_string(),
            task_id: task_id.to_string(),
        })
    }

    async fn trigger_scheduled_research(&self, _cred: &Credential) -> ApiResult<ScheduledRunAck> {
        self.record("trigger_scheduled_research");
        Ok(ScheduledRunAck {
            message: "Scheduled research triggered".to_string(),
            task_id: "scheduled-1".to_string(),
        })
    }
}

/// Store with the full middleware chain, fed by its own action queue
pub struct Harness {
    store: Store,
    dispatcher: Dispatcher,
    rx: UnboundedReceiver<Action>,
}

impl Harness {
    pub fn new(mock: &MockResearchClient, state: AppState) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let api = Api::new(Arc::new(mock.clone()), Credential::new("test-token"));

        let mut store = Store::new(state);
        store.add_middleware(LoggingMiddleware::new());
        store.add_middleware(KeyboardMiddleware::new());
        store.add_middleware(TaskDirectoryMiddleware::new(api.clone(), "test"));
        store.add_middleware(PollingMiddleware::new(POLL_INTERVAL));
        store.add_middleware(SelectionMiddleware::new(api.clone()));
        store.add_middleware(SubmissionMiddleware::new(api));

        Self {
            store,
            dispatcher: Dispatcher::new(tx),
            rx,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Dispatch without processing follow-up actions
    pub async fn dispatch_now(&mut self, action: Action) {
        self.store.dispatch(action, &self.dispatcher).await;
    }

    /// Dispatch and process everything it causes
    pub async fn dispatch(&mut self, action: Action) {
        self.dispatch_now(action).await;
        self.settle().await;
    }

    /// Process queued actions until the queue stays empty for a moment
    pub async fn settle(&mut self) {
        while let Ok(Some(action)) =
            tokio::time::timeout(Duration::from_millis(100), self.rx.recv()).await
        {
            self.store.dispatch(action, &self.dispatcher).await;
        }
    }
}
