//! Application state definitions

use super::forms::{RegistrationForm, ValidityMode};
use super::submission::SubmissionState;

/// Label on the submit button while idle
pub const SUBMIT_LABEL: &str = "Submit";
/// Label on the submit button while a submission is pending
pub const SUBMITTING_LABEL: &str = "Submitting..";
/// Hint shown while the submit button is disabled
pub const FILL_OUT_HINT: &str = "Please fill out the form";
/// Body of the success banner
pub const SUCCESS_MESSAGE: &str = "Congrats! You have been successfully registered.";

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: RegistrationForm,
    pub submission: SubmissionState,
    pub show_success_banner: bool,
    /// Transient status line message
    pub status_message: Option<String>,
    pub validity_mode: ValidityMode,
    /// Render password fields masked
    pub mask_passwords: bool,
}

impl AppState {
    pub fn new(validity_mode: ValidityMode, mask_passwords: bool) -> Self {
        Self {
            validity_mode,
            mask_passwords,
            ..Default::default()
        }
    }

    /// Aggregate validity of the form under the configured mode
    pub fn is_form_valid(&self) -> bool {
        self.form.is_valid(self.validity_mode)
    }

    /// The submit button accepts presses
    pub fn can_submit(&self) -> bool {
        self.is_form_valid() && !self.submission.is_processing()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submission.is_processing() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Enter the processing state. Returns false when the button is disabled.
    pub fn begin_submission(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.submission = SubmissionState::Processing;
        self.status_message = None;
        true
    }

    /// The submitter accepted the form: reset it and show the banner
    pub fn complete_submission(&mut self) {
        self.submission = SubmissionState::Success;
        self.form.reset();
        self.show_success_banner = true;
        self.submission = SubmissionState::Idle;
    }

    /// The submitter rejected the form: keep the values, report the failure
    pub fn fail_submission(&mut self, reason: &str) {
        self.submission = SubmissionState::Idle;
        self.status_message = Some(format!("Submission failed: {reason}"));
    }

    pub fn hide_success_banner(&mut self) {
        self.show_success_banner = false;
    }
}
