//! Application state, organized by component

mod app;
mod report_view;
mod status_bar;
mod submission;
mod task_directory;

pub use app::AppState;
pub use report_view::ReportView;
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
pub use submission::SubmissionState;
pub use task_directory::TaskDirectoryState;
