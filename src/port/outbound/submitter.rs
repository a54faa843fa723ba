//! Resolution submission port.

use async_trait::async_trait;

use crate::domain::{MarketId, ResolutionResult};
use crate::error::Result;

/// Hands a settled outcome to whatever submits it on chain.
#[async_trait]
pub trait ResolutionSubmitter: Send + Sync {
    /// Return the submitter name for logging.
    fn name(&self) -> &'static str;

    /// Submit `result.outcome` for `market_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand-off fails. Callers log it and move on;
    /// submissions are not retried.
    async fn submit(&self, market_id: &MarketId, result: &ResolutionResult) -> Result<()>;
}
