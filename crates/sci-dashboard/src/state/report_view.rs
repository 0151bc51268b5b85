//! Report panel state

use sci_client::Report;

/// What the report panel shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReportView {
    #[default]
    NoSelection,
    Loading {
        task_id: String,
        seq: u64,
    },
    Loaded {
        task_id: String,
        report: Box<Report>,
    },
    Failed {
        task_id: String,
        error: String,
    },
}

impl ReportView {
    pub fn selected_task_id(&self) -> Option<&str> {
        match self {
            Self::NoSelection => None,
            Self::Loading { task_id, .. }
            | Self::Loaded { task_id, .. }
            | Self::Failed { task_id, .. } => Some(task_id),
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Loaded { report, .. } => Some(report),
            _ => None,
        }
    }
}
