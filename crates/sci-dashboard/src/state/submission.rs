//! New research popup state

#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    pub open: bool,
    /// Industry as typed or picked from the presets
    pub input: String,
    /// Industries offered as presets
    pub presets: Vec<String>,
    /// Highlighted preset, `None` while typing freely
    pub preset_cursor: Option<usize>,
    /// A creation request is in flight
    pub submitting: bool,
    pub error: Option<String>,
}

impl SubmissionState {
    pub fn new(presets: Vec<String>) -> Self {
        Self {
            presets,
            ..Self::default()
        }
    }
}
