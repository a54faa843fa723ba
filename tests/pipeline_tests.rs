//! End-to-end pipeline runs against scripted inference and an in-memory
//! fixture table.

mod support;

use std::sync::Arc;

use quintus_oracle::application::{FailureReason, PipelineStage};
use quintus_oracle::domain::MarketId;
use quintus_oracle::error::{ParseError, ResolutionError};
use quintus_oracle::testkit::chain::event;
use quintus_oracle::testkit::llm::ScriptedLlm;
use quintus_oracle::testkit::sports::{fixture_at, MockFixtureSource};

use support::markets::{
    bridge_response, parse_response, pipeline, query, resolve_response, KICKOFF,
};

fn arsenal_chelsea(home_score: u32, away_score: u32) -> MockFixtureSource {
    MockFixtureSource::new().with_fixture(
        "Arsenal",
        "Chelsea",
        fixture_at("Arsenal", "Chelsea", home_score, away_score, KICKOFF),
    )
}

#[tokio::test]
async fn match_winner_market_resolves_to_vocabulary_outcome() {
    let llm = Arc::new(ScriptedLlm::new([
        parse_response("Arsenal", "Chelsea", "Match Winner"),
        bridge_response("Arsenal", "Chelsea"),
        resolve_response("Yes", "Arsenal won 2-1"),
    ]));
    let pipeline = pipeline(llm.clone(), arsenal_chelsea(2, 1));

    let result = pipeline
        .run(
            &query("Will Arsenal beat Chelsea?", &["Yes", "No"]),
            KICKOFF - 3600,
            KICKOFF + 3600,
        )
        .await
        .unwrap();

    assert_eq!(result.outcome, "Yes");
    assert_eq!(result.reasoning, "Arsenal won 2-1");
    assert_eq!(llm.remaining(), 0);
}

#[tokio::test]
async fn over_under_prompt_carries_computed_facts() {
    let llm = Arc::new(ScriptedLlm::new([
        parse_response("Arsenal", "Chelsea", "Over/Under"),
        bridge_response("Arsenal", "Chelsea"),
        resolve_response("over 2.5", "Three goals"),
    ]));
    let prompts = llm.prompts();
    let pipeline = pipeline(llm, arsenal_chelsea(2, 1));

    let result = pipeline
        .run(
            &query(
                "Over 2.5 goals in Arsenal vs Chelsea?",
                &["Under 2.5", "Over 2.5"],
            ),
            KICKOFF - 3600,
            KICKOFF + 3600,
        )
        .await
        .unwrap();

    assert_eq!(result.outcome, "Over 2.5");

    let prompts = prompts.lock().unwrap();
    let resolve_prompt = prompts.last().unwrap();
    assert!(resolve_prompt.contains("- Total goals: 3"));
    assert!(resolve_prompt.contains("- OVER 2.5: YES"));
    assert!(resolve_prompt.contains("- UNDER 2.5: NO"));
    assert!(resolve_prompt.contains(r#"POSSIBLE OUTCOMES: ["Under 2.5", "Over 2.5"]"#));
}

#[tokio::test]
async fn clean_sheet_facts_reach_the_resolver() {
    let llm = Arc::new(ScriptedLlm::new([
        parse_response("Arsenal", "Chelsea", "Clean Sheet"),
        bridge_response("Arsenal", "Chelsea"),
        resolve_response("Yes", "Chelsea failed to score"),
    ]));
    let prompts = llm.prompts();
    let pipeline = pipeline(llm, arsenal_chelsea(3, 0));

    pipeline
        .run(
            &query("Will Arsenal keep a clean sheet against Chelsea?", &["Yes", "No"]),
            KICKOFF,
            KICKOFF,
        )
        .await
        .unwrap();

    let prompts = prompts.lock().unwrap();
    let resolve_prompt = prompts.last().unwrap();
    assert!(resolve_prompt.contains("- Arsenal CLEAN SHEET: YES"));
    assert!(resolve_prompt.contains("- Chelsea CLEAN SHEET: NO"));
    assert!(resolve_prompt.contains("- BOTH TEAMS SCORED: NO"));
}

#[tokio::test]
async fn draw_facts_for_two_all() {
    let llm = Arc::new(ScriptedLlm::new([
        parse_response("Arsenal", "Chelsea", "Draw"),
        bridge_response("Arsenal", "Chelsea"),
        resolve_response("Yes", "2-2"),
    ]));
    let prompts = llm.prompts();
    let pipeline = pipeline(llm, arsenal_chelsea(2, 2));

    pipeline
        .run(
            &query("Will Arsenal vs Chelsea end in a draw?", &["Yes", "No"]),
            KICKOFF - 60,
            KICKOFF + 60,
        )
        .await
        .unwrap();

    let prompts = prompts.lock().unwrap();
    let resolve_prompt = prompts.last().unwrap();
    assert!(resolve_prompt.contains("- RESULT: DRAW"));
    assert!(resolve_prompt.contains("- BOTH TEAMS SCORED: YES"));
    assert!(resolve_prompt.contains("- Arsenal CLEAN SHEET: NO"));
    assert!(resolve_prompt.contains("- Chelsea CLEAN SHEET: NO"));
}

#[tokio::test]
async fn outcome_outside_vocabulary_fails_resolution() {
    let llm = Arc::new(ScriptedLlm::new([
        parse_response("Arsenal", "Chelsea", "Match Winner"),
        bridge_response("Arsenal", "Chelsea"),
        resolve_response("Maybe", "unsure"),
    ]));
    let pipeline = pipeline(llm, arsenal_chelsea(1, 1));

    let failure = pipeline
        .run(
            &query("Will Arsenal beat Chelsea?", &["Yes", "No"]),
            KICKOFF - 60,
            KICKOFF + 60,
        )
        .await
        .unwrap_err();

    assert_eq!(failure.stage, PipelineStage::Resolving);
    assert!(matches!(
        failure.reason,
        FailureReason::Resolution(ResolutionError::OutcomeNotInVocabulary { .. })
    ));
}

#[tokio::test]
async fn resolution_without_json_is_not_defaulted() {
    let llm = Arc::new(ScriptedLlm::new([
        parse_response("Arsenal", "Chelsea", "Match Winner"),
        bridge_response("Arsenal", "Chelsea"),
        "I cannot determine the outcome.".to_string(),
    ]));
    let pipeline = pipeline(llm, arsenal_chelsea(1, 0));

    let failure = pipeline
        .run(
            &query("Will Arsenal beat Chelsea?", &["Yes", "No"]),
            KICKOFF - 60,
            KICKOFF + 60,
        )
        .await
        .unwrap_err();

    assert_eq!(failure.stage, PipelineStage::Resolving);
    assert!(failure.reason.to_string().starts_with("Error resolving market"));
}

#[tokio::test]
async fn unparseable_title_fails_before_any_lookup() {
    let llm = Arc::new(ScriptedLlm::new([r#"{"teams": ["Arsenal"]}"#]));
    let source = arsenal_chelsea(1, 0);
    let calls = source.calls();
    let pipeline = pipeline(llm, source);

    let failure = pipeline
        .run(
            &query("Will Arsenal win?", &["Yes", "No"]),
            KICKOFF - 60,
            KICKOFF + 60,
        )
        .await
        .unwrap_err();

    assert_eq!(failure.stage, PipelineStage::Parsing);
    assert!(matches!(
        failure.reason,
        FailureReason::ParseQuery(ParseError::TeamCount { count: 1 })
    ));
    assert!(failure.reason.to_string().starts_with("Error parsing query"));
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn fixture_outside_window_fails_with_no_fixture() {
    let llm = Arc::new(ScriptedLlm::new([
        parse_response("Arsenal", "Chelsea", "Match Winner"),
        bridge_response("Arsenal", "Chelsea"),
    ]));
    let pipeline = pipeline(llm.clone(), arsenal_chelsea(1, 0));

    let failure = pipeline
        .run(
            &query("Will Arsenal beat Chelsea?", &["Yes", "No"]),
            KICKOFF + 1,
            KICKOFF + 3600,
        )
        .await
        .unwrap_err();

    assert_eq!(failure.stage, PipelineStage::Locating);
    assert_eq!(failure.reason.to_string(), "Error finding match");
    assert_eq!(llm.remaining(), 0);
}

#[tokio::test]
async fn broken_bridge_falls_back_to_listed_order() {
    let llm = Arc::new(ScriptedLlm::new([
        parse_response("Arsenal", "Chelsea", "Match Winner"),
        "no idea".to_string(),
        resolve_response("No", "Chelsea won"),
    ]));
    let source = MockFixtureSource::new().with_fixture(
        "Arsenal",
        "Chelsea",
        fixture_at("Arsenal", "Chelsea", 0, 1, KICKOFF),
    );
    let calls = source.calls();
    let pipeline = pipeline(llm, source);

    let result = pipeline
        .run(
            &query("Will Arsenal beat Chelsea?", &["Yes", "No"]),
            KICKOFF - 60,
            KICKOFF + 60,
        )
        .await
        .unwrap();

    assert_eq!(result.outcome, "No");
    let calls = calls.lock().unwrap();
    assert_eq!(calls[0].0, "Arsenal");
    assert_eq!(calls[0].1, "Chelsea");
}

#[tokio::test]
async fn rerunning_an_identical_market_gives_the_same_outcome() {
    let script = |reasoning: &str| {
        vec![
            parse_response("Chelsea", "Arsenal", "Match Winner"),
            bridge_response("Arsenal", "Chelsea"),
            resolve_response("Yes", reasoning),
        ]
    };
    let market = query("Will Arsenal beat Chelsea?", &["Yes", "No"]);

    let first = pipeline(
        Arc::new(ScriptedLlm::new(script("Arsenal won"))),
        arsenal_chelsea(3, 1),
    )
    .run(&market, KICKOFF - 60, KICKOFF + 60)
    .await
    .unwrap();
    let second = pipeline(
        Arc::new(ScriptedLlm::new(script("3-1 to Arsenal"))),
        arsenal_chelsea(3, 1),
    )
    .run(&market, KICKOFF - 60, KICKOFF + 60)
    .await
    .unwrap();

    assert_eq!(first.outcome, second.outcome);
}

#[tokio::test]
async fn invalid_event_is_rejected_without_inference() {
    let llm = Arc::new(ScriptedLlm::new(Vec::<String>::new()));
    let prompts = llm.prompts();
    let pipeline = pipeline(llm, arsenal_chelsea(1, 0));

    let mut bad = event("5", KICKOFF - 60, KICKOFF + 60);
    bad.outcomes.truncate(1);

    let failure = pipeline.run_event(&bad).await.unwrap_err();

    assert!(matches!(failure.reason, FailureReason::InvalidMarket(_)));
    assert!(prompts.lock().unwrap().is_empty());
    assert_eq!(bad.market_id, MarketId::from("5"));
}
