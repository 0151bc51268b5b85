//! Task directory actions

use crate::domain_models::StatusFilter;
use sci_client::TaskSummary;

#[derive(Debug, Clone, PartialEq)]
pub enum TaskDirectoryAction {
    /// Fetch the list with the active filter
    Refresh,
    /// Change the status filter and refetch
    SetFilter(StatusFilter),
    /// A fetch was issued with `seq`, superseding earlier ones
    LoadStart { seq: u64 },
    /// Tasks of fetch `seq` arrived
    Loaded { seq: u64, tasks: Vec<TaskSummary> },
    /// Fetch `seq` failed
    LoadError {
        seq: u64,
        error: String,
        unauthorized: bool,
    },

    CursorDown,
    CursorUp,
    CursorTop,
    CursorBottom,

    /// Cancel the highlighted task
    CancelHighlighted,
    /// Backend confirmed a cancellation
    Cancelled { task_id: String, message: String },
    /// Trigger the scheduled research run
    RunScheduled,
}
