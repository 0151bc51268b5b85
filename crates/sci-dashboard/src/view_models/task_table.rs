//! Task table view model

use crate::domain_models::PollingPhase;
use crate::state::AppState;
use chrono::Local;
use ratatui::style::Color;
use sci_client::{TaskStatus, TaskSummary};

const PROGRESS_WIDTH: usize = 10;

pub fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => Color::Yellow,
        TaskStatus::Processing => Color::Cyan,
        TaskStatus::Completed => Color::Green,
        TaskStatus::Failed => Color::Red,
        TaskStatus::Cancelled => Color::DarkGray,
    }
}

/// Text progress bar, e.g. `███░░░░░░░  35%`
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100);
    let filled = (percent as usize * width + 50) / 100;
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        percent
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRowViewModel {
    pub marker: &'static str,
    pub industry: String,
    pub status_text: &'static str,
    pub status_color: Color,
    /// Progress bar while processing, failure reason or runtime otherwise
    pub detail: String,
    pub created: String,
}

impl TaskRowViewModel {
    pub fn from_task(task: &TaskSummary, selected: bool) -> Self {
        let detail = if let Some(percent) = task.progress_percent() {
            progress_bar(percent, PROGRESS_WIDTH)
        } else if let Some(reason) = task.failure_reason() {
            reason.to_string()
        } else if let Some(secs) = task.duration {
            format!("{:.0}s", secs)
        } else {
            String::new()
        };

        Self {
            marker: if selected { "●" } else { " " },
            industry: task.industry.clone(),
            status_text: task.status.label(),
            status_color: status_color(task.status),
            detail,
            created: task
                .created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaskTableViewModel {
    pub title: String,
    /// Right-aligned header text: loading, polling and last update
    pub status_text: String,
    pub rows: Vec<TaskRowViewModel>,
    pub cursor: usize,
    pub error: Option<String>,
    pub empty_message: &'static str,
}

impl TaskTableViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let directory = &state.task_directory;
        let selected = state.report_view.selected_task_id();

        let rows = directory
            .tasks
            .iter()
            .map(|t| TaskRowViewModel::from_task(t, selected == Some(t.task_id.as_str())))
            .collect();

        let mut status = Vec::new();
        if directory.loading {
            status.push("loading…".to_string());
        }
        if state.polling == PollingPhase::Polling {
            status.push("live".to_string());
        }
        if let Some(updated) = directory.last_updated {
            status.push(format!("updated {}", updated.format("%H:%M:%S")));
        }

        Self {
            title: format!(" Research Tasks [{}] ", directory.filter),
            status_text: format!(" {} ", status.join(" · ")),
            rows,
            cursor: directory.cursor,
            error: directory.error.clone(),
            empty_message: if directory.loading {
                "Loading tasks…"
            } else {
                "No research tasks. Press 'n' to start one."
            },
        }
    }
}
