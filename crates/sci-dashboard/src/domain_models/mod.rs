//! Domain models of the dashboard
//!
//! Logic that is independent of the store and rendering.

pub mod polling_controller;
pub mod request_sequence;
pub mod selection_tracker;
pub mod status_filter;

pub use polling_controller::{PollingController, PollingPhase};
pub use request_sequence::RequestSequence;
pub use selection_tracker::{SelectOutcome, SelectionTracker};
pub use status_filter::StatusFilter;
