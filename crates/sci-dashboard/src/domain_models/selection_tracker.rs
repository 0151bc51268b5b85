//! Report selection tracking
//!
//! Decides what selecting a task means and issues the sequence number for
//! each report fetch.

use super::RequestSequence;
use sci_client::{TaskStatus, TaskSummary};

/// Outcome of a selection request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Not selectable (unknown or not completed), nothing changes
    Ignored,
    /// The selected task was selected again and is now deselected
    Deselect,
    /// A new task is selected, its report must be fetched with `seq`
    Fetch { task_id: String, seq: u64 },
}

#[derive(Debug, Default)]
pub struct SelectionTracker {
    selected: Option<String>,
    sequence: RequestSequence,
}

impl SelectionTracker {
    /// Select `task_id`, looked up as `task` in the current list
    ///
    /// Only completed tasks are selectable. Selecting the selected task
    /// again toggles it off.
    pub fn select(&mut self, task_id: &str, task: Option<&TaskSummary>) -> SelectOutcome {
        let Some(task) = task.filter(|t| t.task_id == task_id) else {
            return SelectOutcome::Ignored;
        };
        if task.status != TaskStatus::Completed {
            return SelectOutcome::Ignored;
        }

        if self.selected.as_deref() == Some(task_id) {
            self.selected = None;
            // Invalidate the in-flight fetch, if any
            self.sequence.issue();
            return SelectOutcome::Deselect;
        }

        self.selected = Some(task_id.to_string());
        SelectOutcome::Fetch {
            task_id: task_id.to_string(),
            seq: self.sequence.issue(),
        }
    }

    /// Drop the selection, invalidating any in-flight fetch
    pub fn clear(&mut self) {
        if self.selected.take().is_some() {
            self.sequence.issue();
        }
    }

    /// Whether a report response with `seq` may still be applied
    pub fn is_current(&self, seq: u64) -> bool {
        self.selected.is_some() && self.sequence.is_current(seq)
    }
}
