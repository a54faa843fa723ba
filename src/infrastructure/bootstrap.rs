//! Infrastructure bootstrap helpers for runtime wiring.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::llm::anthropic::Anthropic;
use crate::adapter::outbound::llm::openai::OpenAi;
use crate::adapter::outbound::sportsdb::SportsDb;
use crate::adapter::outbound::submitter::{JsonlSubmitter, LogSubmitter};
use crate::application::{
    FixtureLocator, OutcomeResolver, QueryParser, ResolutionPipeline, TeamOrderResolver,
};
use crate::error::Result;
use crate::infrastructure::config::llm::LlmProvider;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::llm::Llm;
use crate::port::outbound::sports::FixtureSource;
use crate::port::outbound::submitter::ResolutionSubmitter;

/// Build the configured LLM client.
///
/// # Errors
///
/// Returns an error if the provider's API key is not set.
pub fn build_llm_client(config: &Config) -> Result<Arc<dyn Llm>> {
    let client: Arc<dyn Llm> = match config.llm.provider {
        LlmProvider::Anthropic => Arc::new(Anthropic::from_env(&config.llm.anthropic)?),
        LlmProvider::OpenAi => Arc::new(OpenAi::from_env(&config.llm.openai)?),
    };
    info!(provider = client.name(), "LLM client initialized");
    Ok(client)
}

#[must_use]
pub fn build_fixture_source(config: &Config) -> Arc<dyn FixtureSource> {
    let source = SportsDb::from_config(&config.sports);
    info!(source = source.name(), base_url = %config.sports.base_url, "Fixture source initialized");
    Arc::new(source)
}

/// Wire the four stages around shared clients.
#[must_use]
pub fn build_pipeline(
    config: &Config,
    llm: Arc<dyn Llm>,
    source: Arc<dyn FixtureSource>,
) -> ResolutionPipeline {
    let policy = config.pipeline.call.policy();

    let mut locator = FixtureLocator::new(source, policy);
    if let Some(season) = config.sports.season() {
        info!(%season, "Season pinned by configuration");
        locator = locator.with_season(season);
    }

    ResolutionPipeline::new(
        QueryParser::new(Arc::clone(&llm), policy),
        TeamOrderResolver::new(Arc::clone(&llm), policy),
        locator,
        OutcomeResolver::new(llm, policy),
    )
}

/// Dry runs log resolutions; otherwise they are appended to `out`.
///
/// With neither a dry run nor an output file, resolutions are logged.
///
/// # Errors
///
/// Returns an error if the output file cannot be opened.
pub async fn build_submitter(
    dry_run: bool,
    out: Option<&Path>,
) -> Result<Arc<dyn ResolutionSubmitter>> {
    let submitter: Arc<dyn ResolutionSubmitter> = match out {
        Some(path) if !dry_run => {
            info!(path = %path.display(), "Appending resolutions to relay file");
            Arc::new(JsonlSubmitter::open(path).await?)
        }
        _ => Arc::new(LogSubmitter),
    };
    Ok(submitter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::config::config;

    #[tokio::test]
    async fn dry_run_ignores_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        let submitter = build_submitter(true, Some(&path)).await.unwrap();

        assert_eq!(submitter.name(), "log");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn output_file_selects_jsonl_submitter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        let submitter = build_submitter(false, Some(&path)).await.unwrap();

        assert_eq!(submitter.name(), "jsonl");
        assert!(path.exists());
    }

    #[tokio::test]
    async fn no_output_file_logs() {
        let submitter = build_submitter(false, None).await.unwrap();
        assert_eq!(submitter.name(), "log");
    }

    #[test]
    fn fixture_source_is_sportsdb() {
        assert_eq!(build_fixture_source(&config()).name(), "sportsdb");
    }
}
