//! Score line to settled outcome.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use super::extract::extract_json;
use super::policy::{CallPolicy, FallbackPolicy};
use crate::domain::{goal_lines, match_outcome, Fixture, ParsedIntent, ResolutionResult, ScoreFacts};
use crate::error::ResolutionError;
use crate::port::outbound::llm::Llm;

const STAGE: &str = "resolve";

/// Picks the winning outcome for a located fixture.
///
/// The model only maps precomputed facts onto the outcome list. Its answer is
/// checked against the vocabulary before it is returned.
pub struct OutcomeResolver {
    llm: Arc<dyn Llm>,
    call_policy: CallPolicy,
}

impl OutcomeResolver {
    /// An unresolved market must never be settled by default.
    pub const FALLBACK: FallbackPolicy<Fixture, ResolutionResult> = FallbackPolicy::Propagate;

    #[must_use]
    pub fn new(llm: Arc<dyn Llm>, call_policy: CallPolicy) -> Self {
        Self { llm, call_policy }
    }

    #[must_use]
    pub const fn fallback_policy(&self) -> FallbackPolicy<Fixture, ResolutionResult> {
        Self::FALLBACK
    }

    /// Resolve a market against a finished fixture.
    ///
    /// On success `outcome` is byte-identical to one entry of `outcomes`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionError`] if the inference call fails, no
    /// `{outcome, reasoning}` object can be decoded, or the outcome is not in
    /// the vocabulary.
    pub async fn resolve_market(
        &self,
        fixture: &Fixture,
        intent: &ParsedIntent,
        outcomes: &[String],
    ) -> Result<ResolutionResult, ResolutionError> {
        let result = self.try_resolve(fixture, intent, outcomes).await;
        Self::FALLBACK.apply(STAGE, fixture, result)
    }

    async fn try_resolve(
        &self,
        fixture: &Fixture,
        intent: &ParsedIntent,
        outcomes: &[String],
    ) -> Result<ResolutionResult, ResolutionError> {
        let prompt = build_prompt(fixture, intent, outcomes);
        let llm = self.llm.as_ref();
        let prompt = prompt.as_str();

        let response = self
            .call_policy
            .run("resolve_market", move || llm.complete(prompt))
            .await
            .map_err(|e| ResolutionError::Inference(Box::new(e)))?;
        debug!(provider = llm.name(), "Resolution response received");

        let raw: ResolutionResult = extract_json(&response)?;
        let outcome = match_outcome(&raw.outcome, outcomes).ok_or_else(|| {
            ResolutionError::OutcomeNotInVocabulary {
                outcome: raw.outcome.clone(),
                outcomes: outcomes.to_vec(),
            }
        })?;

        info!(outcome, "Market resolved");
        Ok(ResolutionResult {
            outcome: outcome.to_string(),
            reasoning: raw.reasoning,
        })
    }
}

fn build_prompt(fixture: &Fixture, intent: &ParsedIntent, outcomes: &[String]) -> String {
    let facts = ScoreFacts::from_fixture(fixture);
    let lines = goal_lines(
        std::iter::once(intent.query.as_str()).chain(outcomes.iter().map(String::as_str)),
    );
    let computed = facts.describe(&fixture.home_team, &fixture.away_team, &lines);
    let vocabulary = outcomes
        .iter()
        .map(|o| format!("\"{o}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"MATCH RESOLUTION PROTOCOL

MATCH DATA:
- Home team: {home}
- Away team: {away}
- {home} goals: {home_score}
- {away} goals: {away_score}
- Total goals: {total}

PREDICTION QUERY: "{query}"
POSSIBLE OUTCOMES: [{vocabulary}]

CORE RULES (apply mechanically):
1. WIN: a team wins when it scored strictly more goals than its opponent
2. LOSS: a team loses when it scored strictly fewer goals than its opponent
3. DRAW: both teams scored the same number of goals
4. CLEAN SHEET: a team keeps a clean sheet when its opponent scored zero goals
5. BOTH TEAMS TO SCORE: true only when each team scored at least one goal
6. OVER X.5: true only when total goals > X
7. UNDER X.5: true only when total goals < X, i.e. total goals <= X-1

EXAMPLES:
- Total goals 3: "Over 2.5" is true, "Under 2.5" is false, "Over 3.5" is false
- Score 2-2: both teams scored, no clean sheet, draw

COMPUTED FACTS:
{computed}
STRICT OUTPUT FORMAT:
Respond ONLY with a valid JSON object:
{{
  "outcome": "<one of the possible outcomes, copied exactly>",
  "reasoning": "<short explanation referencing the score>"
}}"#,
        home = fixture.home_team,
        away = fixture.away_team,
        home_score = fixture.home_score,
        away_score = fixture.away_score,
        total = facts.total_goals(),
        query = intent.query,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use crate::testkit::llm::{FailingLlm, MockLlm};
    use crate::testkit::sports::fixture_at;
    use std::time::Duration;

    fn outcomes() -> Vec<String> {
        vec!["Yes".into(), "No".into()]
    }

    fn intent() -> ParsedIntent {
        ParsedIntent::new(
            "Will there be over 2.5 goals in Arsenal vs Chelsea?",
            ["Arsenal".into(), "Chelsea".into()],
            "Total Goals",
        )
    }

    fn resolver(response: &str) -> OutcomeResolver {
        OutcomeResolver::new(Arc::new(MockLlm::new(response)), CallPolicy::default())
    }

    #[tokio::test]
    async fn returns_vocabulary_outcome() {
        let fixture = fixture_at("Arsenal", "Chelsea", 2, 1, 0);
        let result = resolver(r#"{"outcome": "Yes", "reasoning": "3 goals > 2"}"#)
            .resolve_market(&fixture, &intent(), &outcomes())
            .await
            .unwrap();

        assert_eq!(result.outcome, "Yes");
        assert_eq!(result.reasoning, "3 goals > 2");
    }

    #[tokio::test]
    async fn case_mismatch_is_canonicalised() {
        let fixture = fixture_at("Arsenal", "Chelsea", 2, 1, 0);
        let result = resolver(r#"Answer: {"outcome": " yes ", "reasoning": "r"}"#)
            .resolve_market(&fixture, &intent(), &outcomes())
            .await
            .unwrap();

        assert_eq!(result.outcome, "Yes");
    }

    #[tokio::test]
    async fn foreign_outcome_is_rejected() {
        let fixture = fixture_at("Arsenal", "Chelsea", 2, 1, 0);
        let err = resolver(r#"{"outcome": "Maybe", "reasoning": "unsure"}"#)
            .resolve_market(&fixture, &intent(), &outcomes())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ResolutionError::OutcomeNotInVocabulary { ref outcome, .. } if outcome == "Maybe"
        ));
    }

    #[tokio::test]
    async fn missing_json_is_an_error() {
        let fixture = fixture_at("Arsenal", "Chelsea", 2, 1, 0);
        let err = resolver("The answer is Yes.")
            .resolve_market(&fixture, &intent(), &outcomes())
            .await
            .unwrap_err();

        assert!(matches!(err, ResolutionError::Extract(ExtractError::NoJson)));
    }

    #[tokio::test]
    async fn inference_failure_propagates() {
        let resolver = OutcomeResolver::new(
            Arc::new(FailingLlm::new("overloaded")),
            CallPolicy::once(Duration::from_secs(1)),
        );
        let fixture = fixture_at("Arsenal", "Chelsea", 2, 1, 0);

        let err = resolver
            .resolve_market(&fixture, &intent(), &outcomes())
            .await
            .unwrap_err();
        assert!(matches!(err, ResolutionError::Inference(_)));
    }

    #[test]
    fn prompt_embeds_scores_vocabulary_and_facts() {
        let fixture = fixture_at("Arsenal", "Chelsea", 2, 1, 0);
        let prompt = build_prompt(&fixture, &intent(), &outcomes());

        assert!(prompt.contains("- Arsenal goals: 2"));
        assert!(prompt.contains("- Chelsea goals: 1"));
        assert!(prompt.contains("- Total goals: 3"));
        assert!(prompt.contains(r#"POSSIBLE OUTCOMES: ["Yes", "No"]"#));
        assert!(prompt.contains("OVER 2.5: YES"));
        assert!(prompt.contains("UNDER 2.5: NO"));
        assert!(prompt.contains("Arsenal WON, Chelsea LOST"));
    }

    #[test]
    fn prompt_collects_lines_from_outcomes() {
        let fixture = fixture_at("Arsenal", "Chelsea", 2, 2, 0);
        let outcomes = vec!["Over 3.5".to_string(), "Under 3.5".to_string()];
        let intent = ParsedIntent::new(
            "How many goals in Arsenal vs Chelsea?",
            ["Arsenal".into(), "Chelsea".into()],
            "Total Goals",
        );

        let prompt = build_prompt(&fixture, &intent, &outcomes);
        assert!(prompt.contains("OVER 3.5: YES"));
        assert!(prompt.contains("BOTH TEAMS SCORED: YES"));
        assert!(prompt.contains("RESULT: DRAW"));
    }

    #[test]
    fn resolver_policy_propagates() {
        assert!(OutcomeResolver::FALLBACK.propagates());
    }
}
