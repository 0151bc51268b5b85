//! Reducers
//!
//! Pure functions from state and action to the next state. Side effects
//! live in middleware.

mod app_reducer;
mod polling_reducer;
mod report_view_reducer;
mod status_bar_reducer;
mod submission_reducer;
mod task_directory_reducer;

pub use app_reducer::reduce;
