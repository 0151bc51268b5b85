//! New research popup reducer

use crate::actions::SubmissionAction;
use crate::state::SubmissionState;

pub fn reduce_submission(mut state: SubmissionState, action: &SubmissionAction) -> SubmissionState {
    match action {
        SubmissionAction::Open => {
            state.open = true;
            state.error = None;
        }
        SubmissionAction::Close => {
            state.open = false;
            state.error = None;
        }
        SubmissionAction::InputChar(c) => {
            state.input.push(*c);
            state.preset_cursor = None;
            state.error = None;
        }
        SubmissionAction::Backspace => {
            state.input.pop();
            state.preset_cursor = None;
        }
        SubmissionAction::PresetNext | SubmissionAction::PresetPrevious => {
            let len = state.presets.len();
            if len > 0 {
                let next = match (state.preset_cursor, action) {
                    (None, SubmissionAction::PresetNext) => 0,
                    (None, _) => len - 1,
                    (Some(i), SubmissionAction::PresetNext) => (i + 1) % len,
                    (Some(i), _) => (i + len - 1) % len,
                };
                state.preset_cursor = Some(next);
                state.input = state.presets[next].clone();
                state.error = None;
            }
        }
        SubmissionAction::Rejected(error) => {
            state.error = Some(error.clone());
        }
        SubmissionAction::Started => {
            state.submitting = true;
            state.error = None;
        }
        SubmissionAction::Submitted(_) => {
            state.open = false;
            state.submitting = false;
            state.input.clear();
            state.preset_cursor = None;
            state.error = None;
        }
        SubmissionAction::Failed(error) => {
            state.submitting = false;
            state.error = Some(error.clone());
        }
        SubmissionAction::Submit(_) => {}
    }
    state
}
