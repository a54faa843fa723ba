//! Serial market event loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{error, info, warn};

use super::pipeline::ResolutionPipeline;
use crate::domain::MarketEvent;
use crate::error::Result;
use crate::port::inbound::event::MarketEventSource;
use crate::port::outbound::submitter::ResolutionSubmitter;

/// Why [`Listener::run`] returned normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerExit {
    /// The shutdown signal fired.
    Shutdown,
    /// The event source has no more events.
    Exhausted,
}

/// Running totals over the listener's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerStats {
    pub received: u64,
    pub submitted: u64,
    pub failed: u64,
    pub submit_errors: u64,
}

/// Runs the pipeline once per event, one event at a time.
pub struct Listener {
    pipeline: Arc<ResolutionPipeline>,
    submitter: Arc<dyn ResolutionSubmitter>,
    inter_run_delay: Duration,
    stats: ListenerStats,
}

impl Listener {
    #[must_use]
    pub fn new(
        pipeline: Arc<ResolutionPipeline>,
        submitter: Arc<dyn ResolutionSubmitter>,
        inter_run_delay: Duration,
    ) -> Self {
        Self {
            pipeline,
            submitter,
            inter_run_delay,
            stats: ListenerStats::default(),
        }
    }

    #[must_use]
    pub const fn stats(&self) -> ListenerStats {
        self.stats
    }

    /// Consume events until shutdown or exhaustion.
    ///
    /// A failed pipeline run or submission is logged and the loop moves on.
    /// The pause between runs keeps inference traffic under provider rate
    /// limits.
    ///
    /// # Errors
    ///
    /// Returns an error only when the event source fails.
    pub async fn run(
        &mut self,
        source: &mut dyn MarketEventSource,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<ListenerExit> {
        info!(source = source.name(), submitter = self.submitter.name(), "Listening for markets");

        loop {
            let event = tokio::select! {
                biased;
                () = shutdown_requested(shutdown) => {
                    info!("Shutdown signal received");
                    return Ok(ListenerExit::Shutdown);
                }
                event = source.next_event() => event?,
            };

            let Some(event) = event else {
                info!(stats = ?self.stats, "Event source exhausted");
                return Ok(ListenerExit::Exhausted);
            };

            self.handle(event).await;

            tokio::select! {
                biased;
                () = shutdown_requested(shutdown) => {
                    info!("Shutdown signal received");
                    return Ok(ListenerExit::Shutdown);
                }
                () = tokio::time::sleep(self.inter_run_delay) => {}
            }
        }
    }

    async fn handle(&mut self, event: MarketEvent) {
        self.stats.received += 1;

        let result = match self.pipeline.run_event(&event).await {
            Ok(result) => result,
            Err(failure) => {
                self.stats.failed += 1;
                warn!(
                    market_id = %event.market_id,
                    stage = %failure.stage,
                    reason = %failure.reason,
                    "Market not resolved, skipping submission"
                );
                return;
            }
        };

        match self.submitter.submit(&event.market_id, &result).await {
            Ok(()) => {
                self.stats.submitted += 1;
                info!(
                    market_id = %event.market_id,
                    outcome = %result.outcome,
                    "Resolution submitted"
                );
            }
            Err(e) => {
                self.stats.submit_errors += 1;
                error!(
                    market_id = %event.market_id,
                    outcome = %result.outcome,
                    error = %e,
                    "Resolution submission failed"
                );
            }
        }
    }
}

/// Resolves once the flag is set or every sender is gone.
pub(crate) async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}
