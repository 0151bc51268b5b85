//! Session persistence
//!
//! Holds the bearer credential obtained by `sci-dashboard login` and a bit of
//! UI state restored on the next start (the last status filter).
//!
//! Stored at `~/.config/sci-dashboard/session.toml`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::paths;

const SESSION_VERSION: u32 = 1;

/// Session metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// Credential of the logged-in user
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionAuth {
    pub user_id: u64,
    pub username: String,
    pub email: String,
    pub token: String,
}

impl std::fmt::Debug for SessionAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuth")
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// UI state restored on startup
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SessionData {
    /// Last active status filter, empty = all statuses
    pub status_filter: Option<String>,
}

/// Complete session with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub meta: SessionMeta,
    #[serde(default)]
    pub auth: Option<SessionAuth>,
    #[serde(default)]
    pub session: SessionData,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            meta: SessionMeta {
                last_modified: Utc::now(),
                version: SESSION_VERSION,
            },
            auth: None,
            session: SessionData::default(),
        }
    }
}

impl Session {
    /// Load the session, or defaults if there is none (or it is unreadable)
    pub fn load() -> Self {
        if let Ok(path) = paths::session_path() {
            if path.exists() {
                match Self::load_from_path(&path) {
                    Ok(session) => {
                        log::info!("Loaded session from {:?}", path);
                        return session;
                    }
                    Err(e) => log::warn!("Ignoring unreadable session: {:#}", e),
                }
            }
        }

        log::info!("No existing session found, using defaults");
        Self::default()
    }

    /// Load session from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {:?}", path))
    }

    /// Save session to the default location
    pub fn save(&mut self) -> Result<()> {
        let path = paths::session_path()?;
        self.save_to_path(&path)
    }

    /// Save session to specific path
    pub fn save_to_path(&mut self, path: &Path) -> Result<()> {
        self.meta.last_modified = Utc::now();
        let content = toml::to_string_pretty(self).context("Failed to serialize session")?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        write_private(path, content.as_bytes())
            .with_context(|| format!("Failed to write session file: {:?}", path))?;

        log::info!("Saved session to {:?}", path);
        Ok(())
    }

    pub fn set_auth(&mut self, auth: SessionAuth) {
        self.auth = Some(auth);
    }

    pub fn clear_auth(&mut self) {
        self.auth = None;
    }

    pub fn set_status_filter(&mut self, filter: impl Into<String>) {
        self.session.status_filter = Some(filter.into());
    }

    pub fn status_filter(&self) -> Option<&str> {
        self.session.status_filter.as_deref()
    }
}

/// Write a file only the owner can read, it holds the bearer token
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        options.mode(0o600);
        let mut file = options.open(path)?;
        // Files created before the mode was enforced keep their old bits otherwise
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        file.write_all(content)
    }
    #[cfg(not(unix))]
    {
        options.open(path)?.write_all(content)
    }
}

/// Load the credential stored in the session file at `path`, strictly
///
/// `Ok(None)` when nobody is logged in, `Err` when the session file exists
/// but cannot be read.
pub fn load_session(path: &Path) -> Result<Option<SessionAuth>> {
    if !path.exists() {
        return Ok(None);
    }
    Ok(Session::load_from_path(path)?.auth)
}
