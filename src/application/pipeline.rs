//! Per-market resolution pipeline.
//!
//! ```text
//! Parsing -> Bridging -> Locating -> Resolving -> Done
//!    |                      |            |
//!    +-------> Failed <-----+------------+
//! ```
//!
//! Bridging never fails. Every other stage can end the run with a tagged
//! [`FailureReason`]; a failed run must not be submitted.

use std::fmt;

use tracing::{debug, info, warn};

use super::bridge::TeamOrderResolver;
use super::locator::FixtureLocator;
use super::parser::QueryParser;
use super::resolver::OutcomeResolver;
use crate::domain::{DomainError, MarketEvent, MarketQuery, ResolutionResult};
use crate::error::{ParseError, ResolutionError};

/// Stage of a single pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Parsing,
    Bridging,
    Locating,
    Resolving,
    Done,
    Failed,
}

impl PipelineStage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parsing => "parsing",
            Self::Bridging => "bridging",
            Self::Locating => "locating",
            Self::Resolving => "resolving",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a run ended in [`PipelineStage::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum FailureReason {
    /// The event itself was unusable (bad title, outcomes or window).
    #[error("Invalid market: {0}")]
    InvalidMarket(#[source] DomainError),

    #[error("Error parsing query: {0}")]
    ParseQuery(#[source] ParseError),

    #[error("Error finding match")]
    NoFixture,

    #[error("Error resolving market: {0}")]
    Resolution(#[source] ResolutionError),
}

/// A run that ended without a result, with the stage it failed in.
#[derive(Debug, thiserror::Error)]
#[error("pipeline failed while {stage}: {reason}")]
pub struct PipelineFailure {
    pub stage: PipelineStage,
    #[source]
    pub reason: FailureReason,
}

impl PipelineFailure {
    const fn new(stage: PipelineStage, reason: FailureReason) -> Self {
        Self { stage, reason }
    }
}

/// The four resolution stages, run strictly in order.
pub struct ResolutionPipeline {
    parser: QueryParser,
    bridge: TeamOrderResolver,
    locator: FixtureLocator,
    resolver: OutcomeResolver,
}

impl ResolutionPipeline {
    #[must_use]
    pub const fn new(
        parser: QueryParser,
        bridge: TeamOrderResolver,
        locator: FixtureLocator,
        resolver: OutcomeResolver,
    ) -> Self {
        Self {
            parser,
            bridge,
            locator,
            resolver,
        }
    }

    /// Run every stage for one market.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineFailure`] naming the failing stage when the query
    /// cannot be parsed, no fixture is found inside the window, or the
    /// outcome cannot be resolved.
    pub async fn run(
        &self,
        query: &MarketQuery,
        bet_deadline: i64,
        resolution_deadline: i64,
    ) -> Result<ResolutionResult, PipelineFailure> {
        enter(PipelineStage::Parsing);
        let intent = self
            .parser
            .parse_query(query)
            .await
            .map_err(|e| fail(PipelineStage::Parsing, FailureReason::ParseQuery(e)))?;

        enter(PipelineStage::Bridging);
        let params = self.bridge.bridge_to_search(&intent).await;

        enter(PipelineStage::Locating);
        let fixture = self
            .locator
            .find_match(
                &params.home_team,
                &params.away_team,
                bet_deadline,
                resolution_deadline,
            )
            .await
            .ok_or_else(|| fail(PipelineStage::Locating, FailureReason::NoFixture))?;

        enter(PipelineStage::Resolving);
        let result = self
            .resolver
            .resolve_market(&fixture, &intent, query.outcomes())
            .await
            .map_err(|e| fail(PipelineStage::Resolving, FailureReason::Resolution(e)))?;

        enter(PipelineStage::Done);
        Ok(result)
    }

    /// Validate an inbound event and run the pipeline on it.
    ///
    /// # Errors
    ///
    /// Returns [`FailureReason::InvalidMarket`] before any external call if
    /// the event has an empty title or fewer than two outcomes, and
    /// otherwise whatever [`ResolutionPipeline::run`] returns.
    pub async fn run_event(&self, event: &MarketEvent) -> Result<ResolutionResult, PipelineFailure> {
        let query = event
            .query()
            .map_err(|e| fail(PipelineStage::Parsing, FailureReason::InvalidMarket(e)))?;

        info!(market_id = %event.market_id, title = %event.title, "Resolving market");
        self.run(&query, event.bet_deadline, event.resolution_deadline)
            .await
    }
}

fn enter(stage: PipelineStage) {
    debug!(%stage, "Pipeline stage");
}

fn fail(stage: PipelineStage, reason: FailureReason) -> PipelineFailure {
    warn!(%stage, reason = %reason, "Pipeline failed");
    PipelineFailure::new(stage, reason)
}
