//! Global actions

/// Application-wide actions
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalAction {
    /// Stop polling, persist the session and exit
    Quit,
}
