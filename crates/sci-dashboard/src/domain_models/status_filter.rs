//! Status filter for the task directory
//!
//! `All` sends no status to the backend. Whatever the backend returns, only
//! tasks matching the active filter are ever shown.

use sci_client::{TaskStatus, TaskSummary};
use std::fmt;

/// Order in which `f` cycles through the filters
const CYCLE: [StatusFilter; 6] = [
    StatusFilter::All,
    StatusFilter::Only(TaskStatus::Completed),
    StatusFilter::Only(TaskStatus::Processing),
    StatusFilter::Only(TaskStatus::Pending),
    StatusFilter::Only(TaskStatus::Failed),
    StatusFilter::Only(TaskStatus::Cancelled),
];

/// Status filter of the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    /// Parse a filter as stored in config and session files
    ///
    /// An empty string (or `ALL`) means no filter. Unknown statuses fall back
    /// to `All` with a warning.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        match value.parse::<TaskStatus>() {
            Ok(status) => Self::Only(status),
            Err(e) => {
                log::warn!("Ignoring status filter: {}", e);
                Self::All
            }
        }
    }

    /// Value to persist, inverse of [`StatusFilter::parse`]
    pub fn as_config_str(&self) -> &'static str {
        match self {
            Self::All => "",
            Self::Only(status) => status.as_str(),
        }
    }

    /// Status sent to the backend, `None` for all
    pub fn status(&self) -> Option<TaskStatus> {
        match self {
            Self::All => None,
            Self::Only(status) => Some(*status),
        }
    }

    pub fn matches(&self, task: &TaskSummary) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => task.status == *status,
        }
    }

    /// Keep only matching tasks, preserving order
    pub fn apply(&self, tasks: &[TaskSummary]) -> Vec<TaskSummary> {
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }

    /// Next filter in cycle order
    pub fn next(&self) -> Self {
        let idx = CYCLE.iter().position(|f| f == self).unwrap_or(0);
        CYCLE[(idx + 1) % CYCLE.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Only(status) => status.label(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
