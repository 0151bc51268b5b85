//! Configuration and file management for sci-dashboard
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Session persistence (bearer credential, last status filter)

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod session;

pub use app_config::{AppConfig, API_URL_ENV};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir, session_path};
pub use session::{load_session, Session, SessionAuth, SessionData};
