use super::{ReportView, StatusBarState, SubmissionState, TaskDirectoryState};
use crate::domain_models::{PollingPhase, StatusFilter};
use sci_config::AppConfig;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Logged-in user shown in the header
    pub username: Option<String>,
    /// Backend the dashboard talks to
    pub api_base_url: String,
    pub task_directory: TaskDirectoryState,
    pub polling: PollingPhase,
    pub report_view: ReportView,
    pub submission: SubmissionState,
    pub status_bar: StatusBarState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            username: None,
            api_base_url: String::new(),
            task_directory: TaskDirectoryState::default(),
            polling: PollingPhase::Idle,
            report_view: ReportView::default(),
            submission: SubmissionState::default(),
            status_bar: StatusBarState::default(),
        }
    }
}

impl AppState {
    /// Initial state for the given config and starting filter
    pub fn new(config: &AppConfig, filter: StatusFilter, username: Option<String>) -> Self {
        Self {
            username,
            api_base_url: config.api_base_url.clone(),
            task_directory: TaskDirectoryState::new(filter, config.list_limit),
            submission: SubmissionState::new(config.industries.clone()),
            ..Self::default()
        }
    }
}
