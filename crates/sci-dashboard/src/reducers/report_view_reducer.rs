//! Report panel reducer
//!
//! A result is applied only while the panel is still loading that exact
//! fetch; anything else is a leftover of a superseded selection.

use crate::actions::SelectionAction;
use crate::state::ReportView;

pub fn reduce_report_view(state: ReportView, action: &SelectionAction) -> ReportView {
    match action {
        SelectionAction::Deselect => ReportView::NoSelection,
        SelectionAction::LoadStart { task_id, seq } => ReportView::Loading {
            task_id: task_id.clone(),
            seq: *seq,
        },
        SelectionAction::Loaded {
            task_id,
            seq,
            report,
        } => match state {
            ReportView::Loading { seq: current, .. } if current == *seq => ReportView::Loaded {
                task_id: task_id.clone(),
                report: report.clone(),
            },
            other => other,
        },
        SelectionAction::LoadError {
            task_id,
            seq,
            error,
        } => match state {
            ReportView::Loading { seq: current, .. } if current == *seq => ReportView::Failed {
                task_id: task_id.clone(),
                error: error.clone(),
            },
            other => other,
        },
        SelectionAction::Select(_) => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::report;
    use pretty_assertions::assert_eq;

    fn start(task_id: &str, seq: u64) -> SelectionAction {
        SelectionAction::LoadStart {
            task_id: task_id.to_string(),
            seq,
        }
    }

    fn loaded(task_id: &str, seq: u64) -> SelectionAction {
        SelectionAction::Loaded {
            task_id: task_id.to_string(),
            seq,
            report: Box::new(report(task_id, task_id)),
        }
    }

    #[test]
    fn test_switch_goes_straight_to_loading_new_task() {
        let state = [start("a", 1), loaded("a", 1), start("b", 2)]
            .iter()
            .fold(ReportView::default(), reduce_report_view);

        assert_eq!(
            state,
            ReportView::Loading {
                task_id: "b".to_string(),
                seq: 2
            }
        );
    }

    #[test]
    fn test_late_result_of_previous_selection_is_ignored() {
        let state = [start("a", 1), start("b", 2), loaded("b", 2), loaded("a", 1)]
            .iter()
            .fold(ReportView::default(), reduce_report_view);

        assert_eq!(state.selected_task_id(), Some("b"));
        assert_eq!(state.report().map(|r| r.industry.as_str()), Some("b"));
    }

    #[test]
    fn test_error_replaces_loading_and_clears_report() {
        let state = [
            start("a", 1),
            loaded("a", 1),
            start("b", 2),
            SelectionAction::LoadError {
                task_id: "b".to_string(),
                seq: 2,
                error: "Report not found".to_string(),
            },
        ]
        .iter()
        .fold(ReportView::default(), reduce_report_view);

        assert_eq!(state.report(), None);
        assert_eq!(
            state,
            ReportView::Failed {
                task_id: "b".to_string(),
                error: "Report not found".to_string()
            }
        );
    }

    #[test]
    fn test_result_after_deselect_is_ignored() {
        let state = [start("a", 1), SelectionAction::Deselect, loaded("a", 1)]
            .iter()
            .fold(ReportView::default(), reduce_report_view);

        assert_eq!(state, ReportView::NoSelection);
    }
}
