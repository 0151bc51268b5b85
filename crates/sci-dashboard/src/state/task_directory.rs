//! Task directory state
//!
//! The list of research tasks as last fetched, restricted to the active
//! status filter.

use crate::domain_models::StatusFilter;
use chrono::{DateTime, Local};
use sci_client::TaskSummary;

#[derive(Debug, Clone)]
pub struct TaskDirectoryState {
    /// Tasks of the latest applied fetch, all matching `filter`
    pub tasks: Vec<TaskSummary>,
    pub filter: StatusFilter,
    /// Maximum number of tasks requested per fetch
    pub limit: u32,
    pub loading: bool,
    /// Error of the latest refresh, shown above the list
    pub error: Option<String>,
    /// Sequence number of the latest issued fetch
    pub latest_seq: u64,
    /// Index of the highlighted row
    pub cursor: usize,
    pub last_updated: Option<DateTime<Local>>,
}

impl Default for TaskDirectoryState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            filter: StatusFilter::default(),
            limit: 100,
            loading: false,
            error: None,
            latest_seq: 0,
            cursor: 0,
            last_updated: None,
        }
    }
}

impl TaskDirectoryState {
    pub fn new(filter: StatusFilter, limit: u32) -> Self {
        Self {
            filter,
            limit,
            ..Self::default()
        }
    }

    /// Whether a fetch result with `seq` is the latest and will be applied
    pub fn accepts(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest_seq
    }

    pub fn task(&self, task_id: &str) -> Option<&TaskSummary> {
        self.tasks.iter().find(|t| t.task_id == task_id)
    }

    pub fn task_at_cursor(&self) -> Option<&TaskSummary> {
        self.tasks.get(self.cursor)
    }
}
