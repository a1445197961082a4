//! Submitter that stands in for a network call
//!
//! Nothing leaves the process: the submission waits a fixed delay and then
//! succeeds.

use super::traits::Submitter;
use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default artificial latency before a submission succeeds
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Always-successful submitter with a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, _values: &FormValues) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
