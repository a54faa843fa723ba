use std::sync::Arc;
use std::time::Duration;

use quintus_oracle::application::{
    CallPolicy, FixtureLocator, OutcomeResolver, QueryParser, ResolutionPipeline,
    TeamOrderResolver,
};
use quintus_oracle::domain::{MarketQuery, Season};
use quintus_oracle::port::outbound::llm::Llm;
use quintus_oracle::testkit::sports::MockFixtureSource;

/// Saturday 7 December 2024, 17:30 UTC.
pub const KICKOFF: i64 = 1_733_592_600;

pub fn policy() -> CallPolicy {
    CallPolicy::once(Duration::from_secs(1))
}

pub fn pipeline(llm: Arc<dyn Llm>, source: MockFixtureSource) -> ResolutionPipeline {
    ResolutionPipeline::new(
        QueryParser::new(Arc::clone(&llm), policy()),
        TeamOrderResolver::new(Arc::clone(&llm), policy()),
        FixtureLocator::new(Arc::new(source), policy()).with_season(Season::starting(2024)),
        OutcomeResolver::new(llm, policy()),
    )
}

pub fn query(title: &str, outcomes: &[&str]) -> MarketQuery {
    MarketQuery::try_new(title, outcomes.iter().map(|o| (*o).to_string()).collect())
        .expect("valid market")
}

pub fn parse_response(a: &str, b: &str, prediction_type: &str) -> String {
    format!(r#"{{"teams": ["{a}", "{b}"], "predictionType": "{prediction_type}"}}"#)
}

pub fn bridge_response(home: &str, away: &str) -> String {
    format!(r#"{{"homeTeam": "{home}", "awayTeam": "{away}"}}"#)
}

pub fn resolve_response(outcome: &str, reasoning: &str) -> String {
    format!(
        "Based on the facts:\n```json\n{{\"outcome\": \"{outcome}\", \"reasoning\": \"{reasoning}\"}}\n```"
    )
}
