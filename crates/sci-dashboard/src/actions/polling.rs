//! Polling lifecycle notifications

/// Emitted by the polling middleware when the refresh timer changes state
#[derive(Debug, Clone, PartialEq)]
pub enum PollingAction {
    Started,
    Stopped,
}
