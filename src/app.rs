//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::{is_shortcut, is_text_input};
use crate::state::{AppState, SubmissionEvent};
use crate::submit::{SubmissionController, Submitter};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Background submission and banner timers
    pub submissions: SubmissionController,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, submitter: Arc<dyn Submitter>) -> Self {
        Self {
            state: AppState::new(config.validity_mode(), config.mask_passwords()),
            submissions: SubmissionController::new(submitter, config.banner_duration()),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('c') if is_shortcut(key.modifiers) => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            _ => {}
        }

        // The form is frozen until the pending submission resolves
        if self.state.submission.is_processing() {
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let on_submit_button = self.state.form.is_submit_focused();
        match key.code {
            KeyCode::Char('s') if is_shortcut(key.modifiers) => self.submit(),
            KeyCode::Char('u') if is_shortcut(key.modifiers) => self.state.form.clear_focused(),
            KeyCode::Tab | KeyCode::Down => self.state.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.focus_prev(),
            KeyCode::Enter if on_submit_button => self.submit(),
            KeyCode::Enter => self.state.form.focus_next(),
            KeyCode::Char(c) if is_text_input(key.modifiers) => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Press the submit button. Leaving the focused field validates it first.
    fn submit(&mut self) {
        self.state.form.blur_focused();
        if self.state.begin_submission() {
            self.submissions.start(self.state.form.values.clone());
        } else {
            tracing::debug!("Submit ignored: button disabled");
        }
    }

    /// Reduce a finished background event into the state
    pub fn apply_submission_event(&mut self, event: SubmissionEvent) {
        match event {
            SubmissionEvent::Completed => {
                self.state.complete_submission();
                self.submissions.schedule_banner_hide();
            }
            SubmissionEvent::Failed(reason) => self.state.fail_submission(&reason),
            SubmissionEvent::BannerExpired => self.state.hide_success_banner(),
        }
    }

    /// Apply every event that has arrived since the last frame
    pub fn process_submission_events(&mut self) {
        while let Some(event) = self.submissions.try_next_event() {
            self.apply_submission_event(event);
        }
    }

    /// Cancel pending timers before the UI goes away
    pub fn shutdown(&self) {
        self.submissions.shutdown();
    }
}
