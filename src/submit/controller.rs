//! Submission controller
//!
//! Runs the submitter and the banner timer as background tasks and reports
//! their outcome over a channel drained by the UI loop. Every task is tied
//! to the controller's lifetime token, so nothing fires after teardown.

use super::traits::Submitter;
use crate::state::{FormValues, SubmissionEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Default time the success banner stays on screen
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_millis(3500);

pub struct SubmissionController {
    submitter: Arc<dyn Submitter>,
    banner_duration: Duration,
    events_tx: UnboundedSender<SubmissionEvent>,
    events_rx: UnboundedReceiver<SubmissionEvent>,
    lifetime: CancellationToken,
    /// Pending banner hide timer, if any
    banner_cancel: Option<CancellationToken>,
}

impl SubmissionController {
    pub fn new(submitter: Arc<dyn Submitter>, banner_duration: Duration) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        Self {
            submitter,
            banner_duration,
            events_tx,
            events_rx,
            lifetime: CancellationToken::new(),
            banner_cancel: None,
        }
    }

    /// Submit the form in the background. Reports `Completed` or `Failed`.
    pub fn start(&self, values: FormValues) {
        let submitter = Arc::clone(&self.submitter);
        let tx = self.events_tx.clone();
        let cancel = self.lifetime.child_token();

        info!("Submission started");
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Submission cancelled before completion");
                }
                result = submitter.submit(&values) => {
                    let event = match result {
                        Ok(()) => {
                            info!("Submission completed");
                            SubmissionEvent::Completed
                        }
                        Err(e) => {
                            warn!("Submission failed: {e:#}");
                            SubmissionEvent::Failed(e.to_string())
                        }
                    };
                    let _ = tx.send(event);
                }
            }
        });
    }

    /// Hide the success banner after the configured duration.
    /// Restarts the countdown if one is already pending.
    pub fn schedule_banner_hide(&mut self) {
        if let Some(previous) = self.banner_cancel.take() {
            previous.cancel();
        }

        let cancel = self.lifetime.child_token();
        self.banner_cancel = Some(cancel.clone());
        let tx = self.events_tx.clone();
        let duration = self.banner_duration;

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Banner timer cancelled");
                }
                _ = tokio::time::sleep(duration) => {
                    let _ = tx.send(SubmissionEvent::BannerExpired);
                }
            }
        });
    }

    /// Next finished event without waiting
    pub fn try_next_event(&mut self) -> Option<SubmissionEvent> {
        self.events_rx.try_recv().ok()
    }

    /// Wait for the next finished event
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<SubmissionEvent> {
        self.events_rx.recv().await
    }

    /// Cancel every pending task
    pub fn shutdown(&self) {
        self.lifetime.cancel();
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::simulated::SimulatedSubmitter;
    use crate::submit::traits::MockSubmitter;
    use anyhow::anyhow;
    use tokio::time::{timeout, Instant};

    fn simulated() -> SubmissionController {
        SubmissionController::new(
            Arc::new(SimulatedSubmitter::default()),
            DEFAULT_BANNER_DURATION,
        )
    }

    mod submission {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn test_completes_after_delay() {
            let mut controller = simulated();
            let start = Instant::now();
            controller.start(FormValues::default());
            assert_eq!(controller.next_event().await, Some(SubmissionEvent::Completed));
            assert!(start.elapsed() >= Duration::from_millis(2000));
        }

        #[tokio::test(start_paused = true)]
        async fn test_nothing_reported_before_delay() {
            let mut controller = simulated();
            controller.start(FormValues::default());
            let early = timeout(Duration::from_millis(1999), controller.next_event()).await;
            assert!(early.is_err());
            assert!(controller.try_next_event().is_none());
        }

        #[tokio::test(start_paused = true)]
        async fn test_passes_values_to_submitter() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit()
                .withf(|values| values.username == "alice")
                .times(1)
                .returning(|_| Ok(()));
            let mut controller = SubmissionController::new(Arc::new(mock), DEFAULT_BANNER_DURATION);

            let values = FormValues {
                username: "alice".to_string(),
                ..Default::default()
            };
            controller.start(values);
            assert_eq!(controller.next_event().await, Some(SubmissionEvent::Completed));
        }

        #[tokio::test(start_paused = true)]
        async fn test_reports_failure() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit()
                .returning(|_| Err(anyhow!("service unavailable")));
            let mut controller = SubmissionController::new(Arc::new(mock), DEFAULT_BANNER_DURATION);

            controller.start(FormValues::default());
            assert_eq!(
                controller.next_event().await,
                Some(SubmissionEvent::Failed("service unavailable".to_string()))
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_shutdown_cancels_pending_submission() {
            let mut controller = simulated();
            controller.start(FormValues::default());
            controller.shutdown();
            let result = timeout(Duration::from_secs(10), controller.next_event()).await;
            assert!(result.is_err());
        }
    }

    mod banner {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn test_expires_after_duration() {
            let mut controller = simulated();
            let start = Instant::now();
            controller.schedule_banner_hide();
            let early = timeout(Duration::from_millis(3499), controller.next_event()).await;
            assert!(early.is_err());
            assert_eq!(controller.next_event().await, Some(SubmissionEvent::BannerExpired));
            assert!(start.elapsed() >= Duration::from_millis(3500));
        }

        #[tokio::test(start_paused = true)]
        async fn test_reschedule_restarts_countdown() {
            let mut controller = simulated();
            let start = Instant::now();
            controller.schedule_banner_hide();
            tokio::time::sleep(Duration::from_millis(2000)).await;
            controller.schedule_banner_hide();

            assert_eq!(controller.next_event().await, Some(SubmissionEvent::BannerExpired));
            assert!(start.elapsed() >= Duration::from_millis(5500));

            let second = timeout(Duration::from_secs(10), controller.next_event()).await;
            assert!(second.is_err());
        }

        #[tokio::test(start_paused = true)]
        async fn test_custom_duration() {
            let mut controller = SubmissionController::new(
                Arc::new(SimulatedSubmitter::default()),
                Duration::from_millis(100),
            );
            let start = Instant::now();
            controller.schedule_banner_hide();
            assert_eq!(controller.next_event().await, Some(SubmissionEvent::BannerExpired));
            assert!(start.elapsed() < Duration::from_millis(3500));
        }

        #[tokio::test(start_paused = true)]
        async fn test_shutdown_cancels_banner_timer() {
            let mut controller = simulated();
            controller.schedule_banner_hide();
            controller.shutdown();
            let result = timeout(Duration::from_secs(10), controller.next_event()).await;
            assert!(result.is_err());
        }
    }
}
