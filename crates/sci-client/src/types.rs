//! Research API data transfer objects
//!
//! These types mirror the JSON exchanged with the backend. They are kept
//! separate from the dashboard state so this crate stays reusable from
//! other frontends (CLI scripts, tests).

use crate::error::{ApiError, ApiResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a research task
///
/// Ordered by lifecycle: a task starts `Pending`, moves to `Processing`
/// and ends in one of the three terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Queued, not yet picked up by a worker
    Pending,
    /// A worker is producing the report
    Processing,
    /// Report is available
    Completed,
    /// Research failed, see `error_message`
    Failed,
    /// Cancelled by a user before completion
    Cancelled,
}

impl TaskStatus {
    /// All statuses in lifecycle order
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Pending,
        TaskStatus::Processing,
        TaskStatus::Completed,
        TaskStatus::Failed,
        TaskStatus::Cancelled,
    ];

    /// No further progress updates are expected
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Completed | TaskStatus::Failed | TaskStatus::Cancelled
        )
    }

    /// Still moving through the backend pipeline (subject to polling)
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Wire representation (`PENDING`, `PROCESSING`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::Processing => "PROCESSING",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Failed => "FAILED",
            TaskStatus::Cancelled => "CANCELLED",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Processing => "Processing",
            TaskStatus::Completed => "Completed",
            TaskStatus::Failed => "Failed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Status record for one research request, as tracked by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Backend-assigned identifier
    pub task_id: String,

    /// Kind of task (e.g. "research"), informational only
    #[serde(default)]
    pub task_type: Option<String>,

    /// Industry label supplied at submission time
    pub industry: String,

    /// Current lifecycle status
    pub status: TaskStatus,

    /// Percentage, only meaningful while `Processing`
    #[serde(default)]
    pub progress: i32,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When a worker picked the task up
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,

    /// When the task reached a terminal state
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,

    /// Failure reason, only present for `Failed`
    #[serde(default)]
    pub error_message: Option<String>,

    /// Runtime in seconds once finished
    #[serde(default)]
    pub duration: Option<f64>,
}

impl TaskSummary {
    /// Progress percentage, `None` unless the task is processing
    pub fn progress_percent(&self) -> Option<u8> {
        match self.status {
            TaskStatus::Processing => Some(self.progress.clamp(0, 100) as u8),
            _ => None,
        }
    }

    /// Failure reason, `None` unless the task failed
    pub fn failure_reason(&self) -> Option<&str> {
        match self.status {
            TaskStatus::Failed => self.error_message.as_deref(),
            _ => None,
        }
    }
}

/// A single risk category in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetric {
    pub category: String,
    pub impact_score: f64,
    pub description: String,
}

/// A source consulted while producing a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
    pub title: String,
}

/// Completed research artifact for one `Completed` task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub task_id: Option<String>,

    pub industry: String,

    /// Numeric supply chain risk indicator (0 = robust, 10 = fragile)
    pub fragility_score: f64,

    pub executive_summary: String,

    #[serde(default)]
    pub critical_alerts: Vec<String>,

    #[serde(default)]
    pub risk_metrics: Vec<RiskMetric>,

    /// Older reports predate this field
    #[serde(default)]
    pub sources: Vec<Source>,

    pub created_at: DateTime<Utc>,
}

/// Query for listing tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListTasksQuery {
    /// Restrict to one status, `None` = all statuses
    pub status: Option<TaskStatus>,
    /// Maximum number of tasks, 0 = server default
    pub limit: u32,
}

impl ListTasksQuery {
    pub fn new(status: Option<TaskStatus>, limit: u32) -> Self {
        Self { status, limit }
    }

    /// Query string pairs, omitting unset parameters
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if self.limit > 0 {
            pairs.push(("limit", self.limit.to_string()));
        }
        pairs
    }
}

/// Body of a research submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub industry: String,
}

/// Trimmed industry label, or `InvalidInput` when it is blank
pub fn validate_industry(industry: &str) -> ApiResult<&str> {
    let industry = industry.trim();
    if industry.is_empty() {
        return Err(ApiError::InvalidInput(
            "Please enter or select an industry".to_string(),
        ));
    }
    Ok(industry)
}

/// Acknowledgement of a cancellation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelAck {
    pub message: String,
    pub task_id: String,
}

/// Acknowledgement of a manually triggered scheduled research run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledRunAck {
    pub message: String,
    pub task_id: String,
}

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
}

/// Response of login and signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Bearer credential attached to every research API call
///
/// The token is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
