//! Actions module
//!
//! Actions are tagged by the component they address. Requests (`Refresh`,
//! `Select`, `Submit`) are turned into side effects by middleware, which
//! report back with result actions that the reducers apply.

pub mod global;
pub mod polling;
pub mod selection;
pub mod status_bar;
pub mod submission;
pub mod task_directory;

pub use global::GlobalAction;
pub use polling::PollingAction;
pub use selection::SelectionAction;
pub use status_bar::StatusBarAction;
pub use submission::SubmissionAction;
pub use task_directory::TaskDirectoryAction;

use ratatui::crossterm::event::KeyEvent;

/// Root action enum, tagged by component
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Raw key press, translated by the keyboard middleware
    KeyPressed(KeyEvent),
    Global(GlobalAction),
    TaskDirectory(TaskDirectoryAction),
    Polling(PollingAction),
    Selection(SelectionAction),
    Submission(SubmissionAction),
    StatusBar(StatusBarAction),
}
