//! Home/away assignment for fixture lookup.

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use super::extract::extract_json;
use super::policy::{CallPolicy, FallbackPolicy};
use crate::domain::{ParsedIntent, SearchParams};
use crate::error::{Error, ExtractError};
use crate::port::outbound::llm::Llm;

const STAGE: &str = "bridge";

/// Why a model-proposed assignment was not used.
#[derive(Debug, thiserror::Error)]
enum BridgeError {
    #[error("inference call failed: {0}")]
    Inference(#[source] Error),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("'{home}' vs '{away}' is not an ordering of the parsed teams")]
    NotAPermutation { home: String, away: String },
}

/// Decides which team is home for lookup purposes. Never fails.
pub struct TeamOrderResolver {
    llm: Arc<dyn Llm>,
    call_policy: CallPolicy,
}

impl TeamOrderResolver {
    /// Any failure degrades to the first-listed team as home.
    pub const FALLBACK: FallbackPolicy<ParsedIntent, SearchParams> =
        FallbackPolicy::DefaultTo(SearchParams::first_listed_is_home);

    #[must_use]
    pub fn new(llm: Arc<dyn Llm>, call_policy: CallPolicy) -> Self {
        Self { llm, call_policy }
    }

    #[must_use]
    pub const fn fallback_policy(&self) -> FallbackPolicy<ParsedIntent, SearchParams> {
        Self::FALLBACK
    }

    /// Assign home and away. The result is always a permutation of
    /// `intent.teams`.
    pub async fn bridge_to_search(&self, intent: &ParsedIntent) -> SearchParams {
        let result = self.try_bridge(intent).await;
        Self::FALLBACK
            .apply(STAGE, intent, result)
            .unwrap_or_else(|_| SearchParams::first_listed_is_home(intent))
    }

    async fn try_bridge(&self, intent: &ParsedIntent) -> Result<SearchParams, BridgeError> {
        let prompt = build_prompt(intent);
        let llm = self.llm.as_ref();
        let prompt = prompt.as_str();

        let response = self
            .call_policy
            .run("bridge_to_search", move || llm.complete(prompt))
            .await
            .map_err(BridgeError::Inference)?;

        let raw: RawOrder = extract_json(&response)?;
        let params = SearchParams {
            home_team: canonical(&raw.home_team, intent).to_string(),
            away_team: canonical(&raw.away_team, intent).to_string(),
            prediction_type: intent.prediction_type.clone(),
        };

        if !params.is_permutation_of(intent) {
            return Err(BridgeError::NotAPermutation {
                home: raw.home_team,
                away: raw.away_team,
            });
        }

        debug!(home = %params.home_team, away = %params.away_team, "Teams ordered");
        Ok(params)
    }
}

#[derive(Deserialize)]
struct RawOrder {
    #[serde(rename = "homeTeam", alias = "home_team")]
    home_team: String,
    #[serde(rename = "awayTeam", alias = "away_team")]
    away_team: String,
}

/// Map a model-returned name back to the intent's own spelling.
fn canonical<'a>(name: &'a str, intent: &'a ParsedIntent) -> &'a str {
    let trimmed = name.trim();
    let wanted = trimmed.to_lowercase();
    intent
        .teams
        .iter()
        .find(|team| team.trim().to_lowercase() == wanted)
        .map_or(trimmed, String::as_str)
}

fn build_prompt(intent: &ParsedIntent) -> String {
    let [first, second] = &intent.teams;
    format!(
        r#"Given these two football teams: {first} and {second}

Determine which team is the HOME team and which is the AWAY team for this fixture.
- The home team is typically listed first
- Look at the order in the original query: "{query}"

Respond ONLY with a valid JSON object in this exact format:
{{
  "homeTeam": "team name",
  "awayTeam": "team name"
}}

Use the team names exactly as given above."#,
        query = intent.query,
    )
}
