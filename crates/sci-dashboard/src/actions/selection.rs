//! Report selection actions

use sci_client::Report;

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionAction {
    /// User picked a task (toggles if already selected)
    Select(String),
    /// Selection cleared
    Deselect,
    /// Report fetch `seq` for `task_id` was issued
    LoadStart { task_id: String, seq: u64 },
    Loaded {
        task_id: String,
        seq: u64,
        report: Box<Report>,
    },
    LoadError {
        task_id: String,
        seq: u64,
        error: String,
    },
}
