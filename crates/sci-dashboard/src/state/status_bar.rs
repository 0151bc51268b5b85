//! Status bar state
//!
//! Feedback for actions that have no surface of their own (cancel,
//! scheduled runs, submissions).

use chrono::{DateTime, Local};
use std::collections::VecDeque;

const MAX_HISTORY: usize = 50;

/// Kind of status message, determines icon and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Running,
    Success,
    Error,
    Warning,
}

impl StatusKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Warning => "⚠️",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
    /// Component that reported the message
    pub source: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
            source: source.into(),
        }
    }
}

/// Recent messages, newest at the back
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    pub messages: VecDeque<StatusMessage>,
}

impl StatusBarState {
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        while self.messages.len() > MAX_HISTORY {
            self.messages.pop_front();
        }
    }
}
