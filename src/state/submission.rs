//! Submission lifecycle state

/// Where the form is in its submission flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// Waiting for the submitter; the button is disabled
    Processing,
    /// Submitted; held only until the form has been reset
    Success,
}

impl SubmissionState {
    pub fn is_processing(self) -> bool {
        self == SubmissionState::Processing
    }
}

/// Results delivered by background timers to the UI loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// The submitter accepted the form
    Completed,
    /// The submitter rejected the form
    Failed(String),
    /// The success banner has been shown long enough
    BannerExpired,
}
