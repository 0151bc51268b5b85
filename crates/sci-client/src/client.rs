//! Client traits for the research and auth APIs
//!
//! The dashboard only talks to these traits, which keeps the HTTP
//! implementation swappable (and mockable in tests).

use crate::error::ApiResult;
use crate::types::{
    AuthResponse, CancelAck, Credential, ListTasksQuery, LoginCredentials, Report,
    ScheduledRunAck, SignupCredentials, TaskSummary, User,
};
use async_trait::async_trait;

/// Supply chain research API
///
/// Every call takes the bearer credential explicitly instead of reading it
/// from ambient storage.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared across the
/// tokio tasks spawned by the dashboard middleware.
///
/// # Example
///
/// ```rust,ignore
/// use sci_client::{Credential, ListTasksQuery, ResearchClient, TaskStatus};
///
/// async fn completed(client: &dyn ResearchClient, cred: &Credential) -> sci_client::ApiResult<usize> {
///     let query = ListTasksQuery::new(Some(TaskStatus::Completed), 100);
///     Ok(client.list_tasks(cred, &query).await?.len())
/// }
/// ```
#[async_trait]
pub trait ResearchClient: Send + Sync {
    /// Create a new research task for an industry
    ///
    /// The returned summary is typically `Pending`.
    async fn submit_research(&self, cred: &Credential, industry: &str) -> ApiResult<TaskSummary>;

    /// List task summaries in server order
    async fn list_tasks(
        &self,
        cred: &Credential,
        query: &ListTasksQuery,
    ) -> ApiResult<Vec<TaskSummary>>;

    /// Fetch the current status of a single task
    async fn task_status(&self, cred: &Credential, task_id: &str) -> ApiResult<TaskSummary>;

    /// Fetch the report of a completed task
    ///
    /// Only defined for `Completed` tasks, the backend errors otherwise.
    async fn task_report(&self, cred: &Credential, task_id: &str) -> ApiResult<Report>;

    /// Cancel a pending or processing task
    async fn cancel_task(
        &self,
        cred: &Credential,
        task_id: &str,
        reason: Option<&str>,
    ) -> ApiResult<CancelAck>;

    /// Run the scheduled research job immediately
    async fn trigger_scheduled_research(&self, cred: &Credential) -> ApiResult<ScheduledRunAck>;
}

/// Login/signup exchange that yields the bearer credential
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> ApiResult<AuthResponse>;

    async fn signup(&self, credentials: &SignupCredentials) -> ApiResult<AuthResponse>;

    /// Resolve the user behind a credential, `Unauthorized` if it expired
    async fn current_user(&self, cred: &Credential) -> ApiResult<User>;
}
