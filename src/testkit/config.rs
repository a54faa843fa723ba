//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use std::sync::Arc;
use std::time::Duration;

use crate::application::{
    CallPolicy, FixtureLocator, OutcomeResolver, QueryParser, ResolutionPipeline,
    TeamOrderResolver,
};
use crate::domain::Season;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::supervisor::SupervisorConfig;
use crate::testkit::llm::ScriptedLlm;
use crate::testkit::sports::MockFixtureSource;

/// Fast supervisor config: millisecond delays, three-failure budget.
pub fn supervisor() -> SupervisorConfig {
    SupervisorConfig {
        initial_delay_ms: 1,
        max_delay_ms: 4,
        backoff_multiplier: 2.0,
        max_consecutive_failures: 3,
    }
}

/// Single attempt with a one-second timeout.
pub fn call_policy() -> CallPolicy {
    CallPolicy::once(Duration::from_secs(1))
}

/// Default config in dry-run mode with no inter-run delay.
pub fn config() -> Config {
    let mut config = Config::default();
    config.dry_run = true;
    config.pipeline.inter_run_delay_ms = 0;
    config.supervisor = supervisor();
    config
}

/// Pipeline whose LLM has no script and whose fixture source is empty.
///
/// Every run fails at parsing; useful where only the event loop matters.
pub fn pipeline() -> ResolutionPipeline {
    let llm = Arc::new(ScriptedLlm::new(Vec::<String>::new()));
    let policy = call_policy();
    ResolutionPipeline::new(
        QueryParser::new(llm.clone(), policy),
        TeamOrderResolver::new(llm.clone(), policy),
        FixtureLocator::new(Arc::new(MockFixtureSource::new()), policy)
            .with_season(Season::starting(2024)),
        OutcomeResolver::new(llm, policy),
    )
}
