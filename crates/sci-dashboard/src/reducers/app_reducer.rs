use super::polling_reducer::reduce_polling;
use super::report_view_reducer::reduce_report_view;
use super::status_bar_reducer::reduce_status_bar;
use super::submission_reducer::reduce_submission;
use super::task_directory_reducer::reduce_task_directory;
use crate::actions::{Action, GlobalAction};
use crate::state::AppState;

/// Root reducer, delegates to the component reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::TaskDirectory(action) => {
            state.task_directory = reduce_task_directory(state.task_directory, action);
        }
        Action::Polling(action) => {
            state.polling = reduce_polling(state.polling, action);
        }
        Action::Selection(action) => {
            state.report_view = reduce_report_view(state.report_view, action);
        }
        Action::Submission(action) => {
            state.submission = reduce_submission(state.submission, action);
        }
        Action::StatusBar(action) => {
            state.status_bar = reduce_status_bar(state.status_bar, action);
        }
        Action::KeyPressed(_) => {}
    }
    state
}
