//! Market title to structured intent.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::extract::extract_json;
use super::policy::{CallPolicy, FallbackPolicy};
use crate::domain::{MarketQuery, ParsedIntent};
use crate::error::ParseError;
use crate::port::outbound::llm::Llm;

const STAGE: &str = "parse";

/// Extracts teams and prediction type from a market title.
pub struct QueryParser {
    llm: Arc<dyn Llm>,
    call_policy: CallPolicy,
}

impl QueryParser {
    /// Parsing failures always surface; a market with no intent cannot be resolved.
    pub const FALLBACK: FallbackPolicy<MarketQuery, ParsedIntent> = FallbackPolicy::Propagate;

    #[must_use]
    pub fn new(llm: Arc<dyn Llm>, call_policy: CallPolicy) -> Self {
        Self { llm, call_policy }
    }

    #[must_use]
    pub const fn fallback_policy(&self) -> FallbackPolicy<MarketQuery, ParsedIntent> {
        Self::FALLBACK
    }

    /// Parse a market title (and optional description) into an intent.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the inference call fails, the response has
    /// no decodable JSON object, or the object does not name exactly two
    /// non-empty teams.
    pub async fn parse_query(&self, query: &MarketQuery) -> Result<ParsedIntent, ParseError> {
        let result = self.try_parse(query).await;
        Self::FALLBACK.apply(STAGE, query, result)
    }

    async fn try_parse(&self, query: &MarketQuery) -> Result<ParsedIntent, ParseError> {
        let prompt = build_prompt(query.title(), query.description());
        let llm = self.llm.as_ref();
        let prompt = prompt.as_str();

        let response = self
            .call_policy
            .run("parse_query", move || llm.complete(prompt))
            .await
            .map_err(|e| ParseError::Inference(Box::new(e)))?;
        debug!(provider = llm.name(), "Query parse response received");

        let raw: RawIntent = extract_json(&response)?;
        raw.into_intent(query.title())
    }
}

fn build_prompt(title: &str, description: Option<&str>) -> String {
    let description = description
        .map(|d| format!("Description: {d}\n"))
        .unwrap_or_default();

    format!(
        r#"Analyze the following prediction market query and extract its key details.

Title: {title}
{description}
Respond ONLY with a valid JSON object in this exact format:
{{
  "teams": ["Team1", "Team2"],
  "predictionType": "Match Winner / Total Goals / Both Teams Score / Clean Sheet / etc.",
  "additionalDetails": {{}}
}}

Rules:
- "teams" must contain exactly two team names, in the order they appear in the query
- Use each team's common full name
- Provide ONLY the JSON, with no explanation or additional text
"#
    )
}

#[derive(Deserialize)]
struct RawIntent {
    teams: Vec<String>,
    #[serde(default, rename = "predictionType", alias = "prediction_type")]
    prediction_type: Option<String>,
    #[serde(default, rename = "additionalDetails", alias = "additional_details")]
    additional_details: Option<Map<String, Value>>,
}

impl RawIntent {
    fn into_intent(self, query: &str) -> Result<ParsedIntent, ParseError> {
        let count = self.teams.len();
        let [first, second]: [String; 2] = self
            .teams
            .try_into()
            .map_err(|_| ParseError::TeamCount { count })?;

        let teams = [first.trim().to_string(), second.trim().to_string()];
        if let Some(index) = teams.iter().position(String::is_empty) {
            return Err(ParseError::EmptyTeam { index });
        }

        let mut intent =
            ParsedIntent::new(query, teams, self.prediction_type.unwrap_or_default());
        intent.additional_details = self.additional_details.unwrap_or_default();
        Ok(intent)
    }
}
