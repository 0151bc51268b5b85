//! View models
//!
//! Pre-computed presentation data, so views only lay out and draw.

pub mod report_panel;
pub mod status_bar;
pub mod task_table;

pub use report_panel::{FragilityLevel, ReportPanelViewModel};
pub use status_bar::StatusBarViewModel;
pub use task_table::TaskTableViewModel;
