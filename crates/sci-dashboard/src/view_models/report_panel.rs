//! Report panel view model

use crate::state::{AppState, ReportView};
use ratatui::style::Color;
use sci_client::Report;

/// Severity band of a 0-10 fragility or impact score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragilityLevel {
    Low,
    Medium,
    High,
}

impl FragilityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 7.0 {
            Self::High
        } else if score >= 4.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Low => Color::Green,
            Self::Medium => Color::Yellow,
            Self::High => Color::Red,
        }
    }
}

/// Gauge ratio for a 0-10 score, clamped
pub fn score_ratio(score: f64) -> f64 {
    (score / 10.0).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub enum ReportPanelViewModel<'a> {
    Placeholder(&'static str),
    Loading(String),
    Error(String),
    Report(&'a Report),
}

impl<'a> ReportPanelViewModel<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        match &state.report_view {
            ReportView::NoSelection => {
                Self::Placeholder("No report selected. Pick a completed task and press Enter.")
            }
            ReportView::Loading { task_id, .. } => {
                let industry = state
                    .task_directory
                    .task(task_id)
                    .map(|t| t.industry.as_str())
                    .unwrap_or(task_id.as_str());
                Self::Loading(format!("Loading report for {}…", industry))
            }
            ReportView::Failed { error, .. } => Self::Error(format!("Failed to load report: {}", error)),
            ReportView::Loaded { report, .. } => Self::Report(report),
        }
    }
}
