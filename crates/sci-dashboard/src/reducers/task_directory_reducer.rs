//! Task directory reducer
//!
//! Applies list results of the latest fetch only. Applied tasks are always
//! restricted to the active filter, whatever the backend returned.

use crate::actions::TaskDirectoryAction;
use crate::state::TaskDirectoryState;
use chrono::Local;
use sci_client::TaskStatus;

pub fn reduce_task_directory(
    mut state: TaskDirectoryState,
    action: &TaskDirectoryAction,
) -> TaskDirectoryState {
    match action {
        TaskDirectoryAction::SetFilter(filter) => {
            state.filter = *filter;
            state.cursor = 0;
        }
        TaskDirectoryAction::LoadStart { seq } => {
            state.latest_seq = *seq;
            state.loading = true;
        }
        TaskDirectoryAction::Loaded { seq, tasks } => {
            if state.accepts(*seq) {
                state.tasks = state.filter.apply(tasks);
                state.loading = false;
                state.error = None;
                state.last_updated = Some(Local::now());
                state.cursor = state.cursor.min(state.tasks.len().saturating_sub(1));
            } else {
                log::debug!("TaskDirectory: dropping stale result #{}", seq);
            }
        }
        TaskDirectoryAction::LoadError { seq, error, .. } => {
            // Previous tasks stay visible next to the error
            if state.accepts(*seq) {
                state.loading = false;
                state.error = Some(error.clone());
            }
        }
        TaskDirectoryAction::CursorDown => {
            if state.cursor + 1 < state.tasks.len() {
                state.cursor += 1;
            }
        }
        TaskDirectoryAction::CursorUp => {
            state.cursor = state.cursor.saturating_sub(1);
        }
        TaskDirectoryAction::CursorTop => {
            state.cursor = 0;
        }
        TaskDirectoryAction::CursorBottom => {
            state.cursor = state.tasks.len().saturating_sub(1);
        }
        TaskDirectoryAction::Cancelled { task_id, .. } => {
            if let Some(task) = state.tasks.iter_mut().find(|t| &t.task_id == task_id) {
                task.status = TaskStatus::Cancelled;
            }
            // Keep the list consistent with the filter
            let filter = state.filter;
            state.tasks.retain(|t| filter.matches(t));
            state.cursor = state.cursor.min(state.tasks.len().saturating_sub(1));
        }
        TaskDirectoryAction::Refresh
        | TaskDirectoryAction::CancelHighlighted
        | TaskDirectoryAction::RunScheduled => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::StatusFilter;
    use crate::test_support::task;
    use pretty_assertions::assert_eq;

    fn reduce_all(state: TaskDirectoryState, actions: &[TaskDirectoryAction]) -> TaskDirectoryState {
        actions.iter().fold(state, reduce_task_directory)
    }

    fn ids(state: &TaskDirectoryState) -> Vec<&str> {
        state.tasks.iter().map(|t| t.task_id.as_str()).collect()
    }

    #[test]
    fn test_loaded_applies_filter() {
        let state = TaskDirectoryState::new(StatusFilter::Only(TaskStatus::Completed), 100);
        let state = reduce_all(
            state,
            &[
                TaskDirectoryAction::LoadStart { seq: 1 },
                TaskDirectoryAction::Loaded {
                    seq: 1,
                    tasks: vec![
                        task("a", TaskStatus::Pending),
                        task("b", TaskStatus::Completed),
                    ],
                },
            ],
        );
        assert_eq!(ids(&state), vec!["b"]);
        assert!(!state.loading);
    }

    #[test]
    fn test_out_of_order_results_keep_latest() {
        let state = reduce_all(
            TaskDirectoryState::default(),
            &[
                TaskDirectoryAction::LoadStart { seq: 1 },
                TaskDirectoryAction::LoadStart { seq: 2 },
                TaskDirectoryAction::Loaded {
                    seq: 2,
                    tasks: vec![task("new", TaskStatus::Completed)],
                },
                TaskDirectoryAction::Loaded {
                    seq: 1,
                    tasks: vec![task("old", TaskStatus::Completed)],
                },
                TaskDirectoryAction::LoadError {
                    seq: 1,
                    error: "late failure".to_string(),
                    unauthorized: false,
                },
            ],
        );
        assert_eq!(ids(&state), vec!["new"]);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_stale_result_while_newer_in_flight_is_dropped() {
        let state = reduce_all(
            TaskDirectoryState::default(),
            &[
                TaskDirectoryAction::LoadStart { seq: 1 },
                TaskDirectoryAction::LoadStart { seq: 2 },
                TaskDirectoryAction::Loaded {
                    seq: 1,
                    tasks: vec![task("old", TaskStatus::Completed)],
                },
            ],
        );
        assert!(state.tasks.is_empty());
        assert!(state.loading);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = TaskDirectoryState::default();
        state.tasks = vec![
            task("a", TaskStatus::Completed),
            task("b", TaskStatus::Completed),
        ];

        let state = reduce_all(
            state,
            &[
                TaskDirectoryAction::CursorDown,
                TaskDirectoryAction::CursorDown,
                TaskDirectoryAction::CursorDown,
            ],
        );
        assert_eq!(state.cursor, 1);

        let state = reduce_task_directory(state, &TaskDirectoryAction::CursorUp);
        assert_eq!(state.cursor, 0);
        let state = reduce_task_directory(state, &TaskDirectoryAction::CursorUp);
        assert_eq!(state.cursor, 0);

        // A shorter list pulls the cursor back
        let state = reduce_all(
            TaskDirectoryState {
                cursor: 5,
                ..state
            },
            &[
                TaskDirectoryAction::LoadStart { seq: 1 },
                TaskDirectoryAction::Loaded {
                    seq: 1,
                    tasks: vec![task("a", TaskStatus::Completed)],
                },
            ],
        );
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cancelled_respects_filter() {
        let mut state = TaskDirectoryState::new(StatusFilter::Only(TaskStatus::Processing), 100);
        state.tasks = vec![task("a", TaskStatus::Processing)];

        let state = reduce_task_directory(
            state,
            &TaskDirectoryAction::Cancelled {
                task_id: "a".to_string(),
                message: "Task cancelled".to_string(),
            },
        );
        assert!(state.tasks.is_empty());
    }
}
