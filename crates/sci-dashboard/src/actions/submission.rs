//! New research popup actions

use sci_client::TaskSummary;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionAction {
    Open,
    Close,
    InputChar(char),
    Backspace,
    PresetNext,
    PresetPrevious,
    /// Submit a research request for the industry
    Submit(String),
    /// Input was rejected before any request was made
    Rejected(String),
    /// Creation request is in flight
    Started,
    /// Backend accepted the request
    Submitted(TaskSummary),
    Failed(String),
}
