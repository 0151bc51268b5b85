//! reqwest-based API client
//!
//! Direct implementation of `ResearchClient` and `AuthClient` that makes real
//! HTTP calls against the backend.

use crate::client::{AuthClient, ResearchClient};
use crate::error::{ApiError, ApiResult};
use crate::types::{
    AuthResponse, CancelAck, Credential, ListTasksQuery, LoginCredentials, Report,
    validate_industry, ResearchRequest, ScheduledRunAck, SignupCredentials, TaskSummary, User,
};
use async_trait::async_trait;
use log::debug;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

const RESEARCH_REQUESTS: &str = "/api/supply-chain/research/requests/";
const SCHEDULED_RUN: &str = "/api/supply-chain/research/scheduled/run/";
const AUTH_LOGIN: &str = "/api/auth/login";
const AUTH_SIGNUP: &str = "/api/auth/signup";
const AUTH_ME: &str = "/api/auth/me";

/// HTTP client for the research backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8000`)
    ///
    /// `timeout` bounds every request so a hung call eventually surfaces as
    /// a transport error.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn task_url(&self, task_id: &str, suffix: &str) -> String {
        format!("{}{}{}{}", self.base_url, RESEARCH_REQUESTS, task_id, suffix)
    }

    fn request(&self, method: Method, url: String, cred: Option<&Credential>) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match cred {
            Some(cred) => builder.bearer_auth(cred.token()),
            None => builder,
        }
    }

    /// Send a request and decode a JSON body, mapping non-2xx to `ApiError`
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("API responded {}: {}", status, body);
            return Err(ApiError::from_response(status, &body));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ResearchClient for HttpClient {
    async fn submit_research(&self, cred: &Credential, industry: &str) -> ApiResult<TaskSummary> {
        let industry = validate_industry(industry)?;
        debug!("Submitting research request for '{}'", industry);

        let body = ResearchRequest {
            industry: industry.to_string(),
        };
        let request = self
            .request(Method::POST, self.url(RESEARCH_REQUESTS), Some(cred))
            .json(&body);

        self.send_json(request).await
    }

    async fn list_tasks(
        &self,
        cred: &Credential,
        query: &ListTasksQuery,
    ) -> ApiResult<Vec<TaskSummary>> {
        debug!(
            "Listing tasks (status: {:?}, limit: {})",
            query.status, query.limit
        );

        let request = self
            .request(Method::GET, self.url(RESEARCH_REQUESTS), Some(cred))
            .query(&query.to_pairs());

        let tasks: Vec<TaskSummary> = self.send_json(request).await?;
        debug!("Listed {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn task_status(&self, cred: &Credential, task_id: &str) -> ApiResult<TaskSummary> {
        debug!("Fetching status of task {}", task_id);

        let request = self.request(Method::GET, self.task_url(task_id, "/status"), Some(cred));
        self.send_json(request).await
    }

    async fn task_report(&self, cred: &Credential, task_id: &str) -> ApiResult<Report> {
        debug!("Fetching report of task {}", task_id);

        let request = self.request(Method::GET, self.task_url(task_id, "/report"), Some(cred));
        self.send_json(request).await
    }

    async fn cancel_task(
        &self,
        cred: &Credential,
        task_id: &str,
        reason: Option<&str>,
    ) -> ApiResult<CancelAck> {
        debug!("Cancelling task {} (reason: {:?})", task_id, reason);

        let mut request = self.request(Method::DELETE, self.task_url(task_id, "/"), Some(cred));
        if let Some(reason) = reason {
            request = request.json(&serde_json::json!({ "reason": reason }));
        }
        self.send_json(request).await
    }

    async fn trigger_scheduled_research(&self, cred: &Credential) -> ApiResult<ScheduledRunAck> {
        debug!("Triggering scheduled research run");

        let request = self.request(Method::POST, self.url(SCHEDULED_RUN), Some(cred));
        self.send_json(request).await
    }
}

#[async_trait]
impl AuthClient for HttpClient {
    async fn login(&self, credentials: &LoginCredentials) -> ApiResult<AuthResponse> {
        debug!("Logging in as {}", credentials.username);

        let request = self
            .request(Method::POST, self.url(AUTH_LOGIN), None)
            .json(credentials);
        self.send_json(request).await
    }

    async fn signup(&self, credentials: &SignupCredentials) -> ApiResult<AuthResponse> {
        debug!("Signing up as {}", credentials.username);

        let request = self
            .request(Method::POST, self.url(AUTH_SIGNUP), None)
            .json(credentials);
        self.send_json(request).await
    }

    async fn current_user(&self, cred: &Credential) -> ApiResult<User> {
        let request = self.request(Method::GET, self.url(AUTH_ME), Some(cred));
        self.send_json(request).await
    }
}
