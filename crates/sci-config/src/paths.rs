//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/sci-dashboard/`, `~/.cache/sci-dashboard/`
//! - macOS: `~/Library/Application Support/sci-dashboard/`, `~/Library/Caches/sci-dashboard/`
//! - Windows: `%APPDATA%\sci-dashboard\`, `%LOCALAPPDATA%\sci-dashboard\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "sci-dashboard";

/// Get the application config directory
/// Returns ~/.config/sci-dashboard/ on Linux, ~/Library/Application Support/sci-dashboard/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory (log files live here in release builds)
/// Returns ~/.cache/sci-dashboard/ on Linux, ~/Library/Caches/sci-dashboard/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the session file (credential + last UI state)
pub fn session_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("session.toml"))
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
