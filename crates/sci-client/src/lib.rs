//! Supply chain research API client
//!
//! This crate provides a trait-based client for the research backend and
//! its auth endpoints. The dashboard depends on the traits only, the HTTP
//! implementation is plugged in at startup.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  ResearchClient trait   AuthClient trait │
//! │  - submit_research()    - login()        │
//! │  - list_tasks()         - signup()       │
//! │  - task_report()        - current_user() │
//! │  - cancel_task() ...                     │
//! └──────────────────────────────────────────┘
//!                      │
//!                      ▼
//!            ┌───────────────────┐
//!            │ HttpClient        │
//!            │ (reqwest, bearer) │
//!            └───────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use sci_client::{HttpClient, ListTasksQuery, ResearchClient, TokenResolver};
//! use std::time::Duration;
//!
//! # async fn example() -> sci_client::ApiResult<()> {
//! let client = HttpClient::new("http://localhost:8000", Duration::from_secs(30))?;
//! let cred = TokenResolver::new().resolve()?;
//! let tasks = client.list_tasks(&cred, &ListTasksQuery::new(None, 100)).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod token_resolver;
pub mod types;

pub use client::{AuthClient, ResearchClient};
pub use error::{ApiError, ApiResult};
pub use http_client::HttpClient;
pub use token_resolver::{TokenResolver, TOKEN_ENV};
pub use types::{
    AuthResponse, CancelAck, Credential, ListTasksQuery, LoginCredentials, Report, RiskMetric,
    ScheduledRunAck, SignupCredentials, Source, TaskStatus, TaskSummary, User,
};
pub use types::validate_industry;
