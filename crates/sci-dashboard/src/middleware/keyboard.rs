//! Keyboard middleware
//!
//! Translates raw key presses into component actions. While the new
//! research popup is open it captures all keys except Ctrl+C.

use crate::actions::{
    Action, GlobalAction, SelectionAction, SubmissionAction, TaskDirectoryAction,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::{BoxFuture, Middleware};
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

/// Map a key press to an action for the current state
pub fn translate(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Global(GlobalAction::Quit));
    }

    if state.submission.open {
        popup_key(key, state)
    } else {
        main_key(key, state)
    }
}

fn popup_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    let action = match key.code {
        KeyCode::Esc => SubmissionAction::Close,
        KeyCode::Enter => SubmissionAction::Submit(state.submission.input.clone()),
        KeyCode::Backspace => SubmissionAction::Backspace,
        KeyCode::Up => SubmissionAction::PresetPrevious,
        KeyCode::Down | KeyCode::Tab => SubmissionAction::PresetNext,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            SubmissionAction::InputChar(c)
        }
        _ => return None,
    };
    Some(Action::Submission(action))
}

fn main_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    let directory = &state.task_directory;
    let action = match key.code {
        KeyCode::Char('q') => Action::Global(GlobalAction::Quit),
        KeyCode::Char('j') | KeyCode::Down => Action::TaskDirectory(TaskDirectoryAction::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Action::TaskDirectory(TaskDirectoryAction::CursorUp),
        KeyCode::Char('g') | KeyCode::Home => Action::TaskDirectory(TaskDirectoryAction::CursorTop),
        KeyCode::Char('G') | KeyCode::End => {
            Action::TaskDirectory(TaskDirectoryAction::CursorBottom)
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let task = directory.task_at_cursor()?;
            Action::Selection(SelectionAction::Select(task.task_id.clone()))
        }
        KeyCode::Esc => Action::Selection(SelectionAction::Deselect),
        KeyCode::Char('f') => {
            Action::TaskDirectory(TaskDirectoryAction::SetFilter(directory.filter.next()))
        }
        KeyCode::Char('r') => Action::TaskDirectory(TaskDirectoryAction::Refresh),
        KeyCode::Char('n') => Action::Submission(SubmissionAction::Open),
        KeyCode::Char('x') => Action::TaskDirectory(TaskDirectoryAction::CancelHighlighted),
        KeyCode::Char('s') => Action::TaskDirectory(TaskDirectoryAction::RunScheduled),
        _ => return None,
    };
    Some(action)
}

impl Middleware for KeyboardMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            let Action::KeyPressed(key) = action else {
                return true;
            };
            if let Some(translated) = translate(*key, state) {
                dispatcher.dispatch(translated);
            }
            false
        })
    }
}
