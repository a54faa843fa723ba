//! Oracle runtime lifecycle.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::adapter::inbound::jsonl::JsonlEventSource;
use crate::application::{Listener, ListenerExit, ListenerStats, ResolutionPipeline};
use crate::domain::{MarketQuery, ResolutionResult};
use crate::error::Result;
use crate::infrastructure::bootstrap::{
    build_fixture_source, build_llm_client, build_pipeline, build_submitter,
};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::supervisor::Supervisor;
use crate::port::inbound::event::MarketEventSource;
use crate::port::outbound::submitter::ResolutionSubmitter;

/// Where the listener reads events from and writes resolutions to.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// JSON-lines event file. `None` or `-` reads stdin.
    pub events: Option<PathBuf>,
    /// JSON-lines relay file for resolutions.
    pub out: Option<PathBuf>,
}

impl RunRequest {
    fn events_path(&self) -> Option<&Path> {
        self.events
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

/// Build every component from `config` and listen until shutdown or
/// the event source is exhausted.
///
/// # Errors
///
/// Returns an error if a component cannot be built or the supervisor gives
/// up on the event source.
pub async fn run_with_shutdown(
    config: Config,
    request: RunRequest,
    mut shutdown: watch::Receiver<bool>,
) -> Result<ListenerStats> {
    info!(
        dry_run = config.dry_run,
        provider = ?config.llm.provider,
        "Starting quintus-oracle"
    );

    let llm = build_llm_client(&config)?;
    let pipeline = Arc::new(build_pipeline(&config, llm, build_fixture_source(&config)));
    let submitter = build_submitter(config.dry_run, request.out.as_deref()).await?;

    match request.events_path() {
        Some(path) => {
            info!(path = %path.display(), "Reading market events from file");
            let mut source = JsonlEventSource::open(path).await?;
            listen(&config, pipeline, submitter, &mut source, &mut shutdown).await
        }
        None => {
            info!("Reading market events from stdin");
            let mut source = JsonlEventSource::stdin();
            listen(&config, pipeline, submitter, &mut source, &mut shutdown).await
        }
    }
}

/// Run the supervised listener over already-built components.
///
/// # Errors
///
/// Returns the event source error once the supervisor gives up.
pub async fn listen(
    config: &Config,
    pipeline: Arc<ResolutionPipeline>,
    submitter: Arc<dyn ResolutionSubmitter>,
    source: &mut dyn MarketEventSource,
    shutdown: &mut watch::Receiver<bool>,
) -> Result<ListenerStats> {
    let mut listener = Listener::new(pipeline, submitter, config.pipeline.inter_run_delay());
    let mut supervisor = Supervisor::new(config.supervisor.clone());

    let exit = supervisor.run(&mut listener, source, shutdown).await?;
    let stats = listener.stats();
    match exit {
        ListenerExit::Shutdown => info!(?stats, "Listener stopped by shutdown"),
        ListenerExit::Exhausted => info!(?stats, "Listener finished, no more events"),
    }
    Ok(stats)
}

/// Resolve one market outside the listener.
///
/// # Errors
///
/// Returns [`Error::Pipeline`](crate::error::Error::Pipeline) when the run
/// fails, or an error if the LLM client cannot be built.
pub async fn resolve_once(
    config: &Config,
    query: &MarketQuery,
    bet_deadline: i64,
    resolution_deadline: i64,
) -> Result<ResolutionResult> {
    let llm = build_llm_client(config)?;
    let pipeline = build_pipeline(config, llm, build_fixture_source(config));
    Ok(pipeline.run(query, bet_deadline, resolution_deadline).await?)
}
