//! Dry-run submitter.

use async_trait::async_trait;
use tracing::info;

use crate::domain::{MarketId, ResolutionResult};
use crate::error::Result;
use crate::port::outbound::submitter::ResolutionSubmitter;

/// Logs each resolution instead of handing it to the relay.
pub struct LogSubmitter;

#[async_trait]
impl ResolutionSubmitter for LogSubmitter {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn submit(&self, market_id: &MarketId, result: &ResolutionResult) -> Result<()> {
        info!(
            %market_id,
            outcome = %result.outcome,
            reasoning = %result.reasoning,
            "Dry run: resolution not submitted"
        );
        Ok(())
    }
}
