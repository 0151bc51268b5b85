//! Bearer credential resolution
//!
//! The dashboard never reads the credential from ambient state during a
//! request; it resolves one up front and passes it into every call.

use crate::error::{ApiError, ApiResult};
use crate::types::Credential;
use log::debug;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the persisted session
pub const TOKEN_ENV: &str = "SCI_TOKEN";

/// Resolves the bearer credential
///
/// Tries, in order:
/// 1. `SCI_TOKEN` env var
/// 2. The session persisted by `sci-dashboard login`
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    env_token: Option<String>,
    session_path: Option<PathBuf>,
}

impl TokenResolver {
    /// Create a resolver, capturing `SCI_TOKEN` and the default session location
    pub fn new() -> Self {
        Self {
            env_token: std::env::var(TOKEN_ENV).ok().filter(|t| !t.trim().is_empty()),
            session_path: sci_config::session_path().ok(),
        }
    }

    /// Create a resolver with an explicit token (takes precedence over the session)
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            env_token: Some(token.into()),
            session_path: None,
        }
    }

    /// Look the session up in `path` instead of the default location
    pub fn with_session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = Some(path.into());
        self
    }

    /// Resolve a credential
    pub fn resolve(&self) -> ApiResult<Credential> {
        if let Some(ref token) = self.env_token {
            debug!("Using credential from {}", TOKEN_ENV);
            return Ok(Credential::new(token.trim()));
        }

        match self.session_path.as_deref() {
            Some(path) => resolve_from(path),
            None => Err(missing_credential()),
        }
    }
}

fn resolve_from(path: &Path) -> ApiResult<Credential> {
    match sci_config::load_session(path) {
        Ok(Some(session)) => {
            debug!("Using credential from saved session of {}", session.username);
            Ok(Credential::new(session.token))
        }
        Ok(None) => Err(missing_credential()),
        Err(e) => Err(ApiError::Unauthorized {
            message: format!("Failed to read saved session: {}", e),
        }),
    }
}

fn missing_credential() -> ApiError {
    ApiError::Unauthorized {
        message: format!(
            "No credential found. Set {} or run 'sci-dashboard login'",
            TOKEN_ENV
        ),
    }
}
