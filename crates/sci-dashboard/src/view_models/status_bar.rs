//! Status bar view model

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub icon: &'static str,
    pub message: String,
    pub timestamp: String,
    pub source: String,
    pub message_style: Style,
    pub metadata_style: Style,
    pub hint: &'static str,
}

const MAIN_HINT: &str = "j/k move · ⏎ report · f filter · r refresh · n new · x cancel · s scheduled · q quit";
const POPUP_HINT: &str = "type or ↑/↓ presets · ⏎ submit · esc close";

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let hint = if state.submission.open {
            POPUP_HINT
        } else {
            MAIN_HINT
        };
        let metadata_style = Style::default().fg(Color::DarkGray);

        match state.status_bar.latest() {
            Some(msg) => {
                let color = match msg.kind {
                    StatusKind::Running | StatusKind::Warning => Color::Yellow,
                    StatusKind::Success => Color::Green,
                    StatusKind::Error => Color::Red,
                };
                Self {
                    icon: msg.kind.icon(),
                    message: msg.message.clone(),
                    timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                    source: msg.source.clone(),
                    message_style: Style::default().fg(color).add_modifier(Modifier::BOLD),
                    metadata_style,
                    hint,
                }
            }
            None => Self {
                icon: "👋",
                message: format!("Connected to {}", state.api_base_url),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
                metadata_style,
                hint,
            },
        }
    }
}
