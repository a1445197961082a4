//! Form submission: the submitter seam and the timer-driven controller

mod controller;
mod simulated;
mod traits;

pub use controller::{SubmissionController, DEFAULT_BANNER_DURATION};
pub use simulated::{SimulatedSubmitter, DEFAULT_SUBMIT_DELAY};
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;
