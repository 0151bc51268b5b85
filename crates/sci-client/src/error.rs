//! Error taxonomy for research API calls
//!
//! Every failure a caller can see resolves to one `ApiError` variant, so the
//! dashboard can always render a message instead of propagating a panic.

use reqwest::StatusCode;

/// Result alias used across the client
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by [`crate::ResearchClient`] and [`crate::AuthClient`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not complete (connection refused, DNS, timeout)
    #[error("failed to reach the research API: {0}")]
    Transport(String),

    /// Missing, invalid or expired credential (401/403). Never retried.
    #[error("not authorized: {message}")]
    Unauthorized { message: String },

    /// Any other non-2xx response
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape
    #[error("unexpected response from the research API: {0}")]
    Decode(String),

    /// Rejected on the client before any network call
    #[error("{0}")]
    InvalidInput(String),
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and raw body
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized { message },
            _ => ApiError::Rejected {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// One-line text for an error surface in the UI
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(msg) => format!("Failed to fetch: {}", msg),
            ApiError::Unauthorized { message } => {
                format!("{} (run `sci-dashboard login`)", message)
            }
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Decode(msg) => format!("Unexpected response: {}", msg),
            ApiError::InvalidInput(msg) => msg.clone(),
        }
    }

    /// Whether this error stems from the credential rather than the request
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Best-effort message extraction from an error body
///
/// Tries the JSON fields `message`, `detail` and `error` in that order, then
/// falls back to a short plain text body.
fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return ["message", "detail", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .filter(|msg| !msg.is_empty())
            .map(str::to_string);
    }

    // Plain text bodies are shown as-is when short, HTML error pages are not
    if trimmed.len() <= 200 && !trimmed.starts_with('<') {
        return Some(trimmed.to_string());
    }

    None
}
