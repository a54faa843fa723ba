//! Infrastructure orchestration façade.

use tokio::sync::watch;

use crate::application::ListenerStats;
use crate::domain::{MarketQuery, ResolutionResult};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

pub use super::runtime::{listen, resolve_once, run_with_shutdown, RunRequest};

/// Main application orchestrator.
pub struct Orchestrator;

impl Orchestrator {
    /// Run the listener until its event source is exhausted.
    ///
    /// # Errors
    ///
    /// See [`run_with_shutdown`].
    pub async fn run(config: Config, request: RunRequest) -> Result<ListenerStats> {
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        run_with_shutdown(config, request, shutdown_rx).await
    }

    /// Run with externally controlled shutdown signal.
    ///
    /// # Errors
    ///
    /// See [`run_with_shutdown`].
    pub async fn run_with_shutdown(
        config: Config,
        request: RunRequest,
        shutdown: watch::Receiver<bool>,
    ) -> Result<ListenerStats> {
        run_with_shutdown(config, request, shutdown).await
    }

    /// Resolve a single market and return its result.
    ///
    /// # Errors
    ///
    /// See [`resolve_once`].
    pub async fn resolve(
        config: &Config,
        query: &MarketQuery,
        bet_deadline: i64,
        resolution_deadline: i64,
    ) -> Result<ResolutionResult> {
        resolve_once(config, query, bet_deadline, resolution_deadline).await
    }
}
