//! Trait abstraction for form submission to enable mocking in tests

use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;

/// Something that accepts a completed registration form
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Submit the form; resolves once the submission has been accepted
    async fn submit(&self, values: &FormValues) -> Result<()>;
}
