//! Fixture lookup within a market's time window.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::policy::CallPolicy;
use crate::domain::{Fixture, Season, TimeWindow};
use crate::port::outbound::sports::FixtureSource;

/// Finds the single fixture that settles a market.
///
/// Looks the pairing up in the given order first and then swapped, since
/// the statistics source names events in its own home/away convention.
/// Lookup failures are absorbed; absence is the only failure signal.
pub struct FixtureLocator {
    source: Arc<dyn FixtureSource>,
    call_policy: CallPolicy,
    season: Option<Season>,
}

impl FixtureLocator {
    #[must_use]
    pub fn new(source: Arc<dyn FixtureSource>, call_policy: CallPolicy) -> Self {
        Self {
            source,
            call_policy,
            season: None,
        }
    }

    /// Pin the season instead of deriving it from the current date.
    #[must_use]
    pub const fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    fn season(&self) -> Season {
        self.season
            .unwrap_or_else(|| Season::containing(Utc::now().date_naive()))
    }

    /// Find the fixture between `home` and `away` that kicked off inside
    /// `[bet_deadline, resolution_deadline]`, both ends inclusive.
    ///
    /// The direct-order result wins when both orders validate. The swapped
    /// lookup is skipped once the direct one has produced a valid fixture.
    pub async fn find_match(
        &self,
        home: &str,
        away: &str,
        bet_deadline: i64,
        resolution_deadline: i64,
    ) -> Option<Fixture> {
        let window = match TimeWindow::try_new(bet_deadline, resolution_deadline) {
            Ok(window) => window,
            Err(e) => {
                warn!(error = %e, "Market window is empty, no fixture can match");
                return None;
            }
        };
        let season = self.season();

        for (team_a, team_b) in [(home, away), (away, home)] {
            let Some(fixture) = self.lookup(team_a, team_b, season).await else {
                continue;
            };
            if window.contains(fixture.kickoff_epoch()) {
                info!(
                    home = %fixture.home_team,
                    away = %fixture.away_team,
                    kickoff = %fixture.kickoff,
                    "Fixture located"
                );
                return Some(fixture);
            }
            debug!(
                team_a,
                team_b,
                kickoff = fixture.kickoff_epoch(),
                opens_at = window.opens_at(),
                closes_at = window.closes_at(),
                "Fixture outside market window"
            );
        }

        None
    }

    async fn lookup(&self, team_a: &str, team_b: &str, season: Season) -> Option<Fixture> {
        let source = self.source.as_ref();
        let result = self
            .call_policy
            .run("search_fixture", move || {
                source.search_fixture(team_a, team_b, season)
            })
            .await;

        match result {
            Ok(fixture) => fixture,
            Err(e) => {
                warn!(
                    source = source.name(),
                    team_a,
                    team_b,
                    %season,
                    error = %e,
                    "Fixture lookup failed, treating as no result"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::sports::{fixture_at, MockFixtureSource};
    use std::time::Duration;

    const KICKOFF: i64 = 1_733_592_600;

    fn locator(source: MockFixtureSource) -> FixtureLocator {
        FixtureLocator::new(Arc::new(source), CallPolicy::once(Duration::from_secs(1)))
            .with_season(Season::starting(2024))
    }

    #[tokio::test]
    async fn direct_order_hit() {
        let source = MockFixtureSource::new()
            .with_fixture("Arsenal", "Chelsea", fixture_at("Arsenal", "Chelsea", 2, 1, KICKOFF));
        let found = locator(source)
            .find_match("Arsenal", "Chelsea", KICKOFF - 10, KICKOFF + 10)
            .await
            .unwrap();
        assert_eq!(found.home_team, "Arsenal");
    }

    #[tokio::test]
    async fn swapped_order_hit() {
        let source = MockFixtureSource::new()
            .with_fixture("Chelsea", "Arsenal", fixture_at("Chelsea", "Arsenal", 0, 0, KICKOFF));
        let found = locator(source)
            .find_match("Arsenal", "Chelsea", KICKOFF - 10, KICKOFF + 10)
            .await
            .unwrap();
        assert_eq!(found.home_team, "Chelsea");
    }

    #[tokio::test]
    async fn direct_order_takes_priority() {
        let source = MockFixtureSource::new()
            .with_fixture("Arsenal", "Chelsea", fixture_at("Arsenal", "Chelsea", 1, 0, KICKOFF))
            .with_fixture("Chelsea", "Arsenal", fixture_at("Chelsea", "Arsenal", 3, 3, KICKOFF));
        let found = locator(source)
            .find_match("Arsenal", "Chelsea", KICKOFF, KICKOFF)
            .await
            .unwrap();
        assert_eq!(found.home_score, 1);
    }

    #[tokio::test]
    async fn out_of_window_direct_falls_through_to_swapped() {
        let source = MockFixtureSource::new()
            .with_fixture(
                "Arsenal",
                "Chelsea",
                fixture_at("Arsenal", "Chelsea", 1, 0, KICKOFF - 86_400 * 180),
            )
            .with_fixture("Chelsea", "Arsenal", fixture_at("Chelsea", "Arsenal", 2, 2, KICKOFF));
        let found = locator(source)
            .find_match("Arsenal", "Chelsea", KICKOFF - 60, KICKOFF + 60)
            .await
            .unwrap();
        assert_eq!(found.home_team, "Chelsea");
    }

    #[tokio::test]
    async fn lookup_error_does_not_abort_other_order() {
        let source = MockFixtureSource::new()
            .failing_for("Arsenal", "Chelsea")
            .with_fixture("Chelsea", "Arsenal", fixture_at("Chelsea", "Arsenal", 1, 1, KICKOFF));
        let found = locator(source)
            .find_match("Arsenal", "Chelsea", KICKOFF, KICKOFF + 1)
            .await;
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn both_lookups_failing_is_none() {
        let source = MockFixtureSource::new()
            .failing_for("Arsenal", "Chelsea")
            .failing_for("Chelsea", "Arsenal");
        let found = locator(source)
            .find_match("Arsenal", "Chelsea", KICKOFF, KICKOFF + 1)
            .await;
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn inverted_window_is_none_without_lookups() {
        let source = MockFixtureSource::new()
            .with_fixture("Arsenal", "Chelsea", fixture_at("Arsenal", "Chelsea", 1, 0, KICKOFF));
        let calls = source.calls();
        let found = locator(source)
            .find_match("Arsenal", "Chelsea", KICKOFF + 1, KICKOFF - 1)
            .await;
        assert!(found.is_none());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn swapped_lookup_skipped_after_direct_hit() {
        let source = MockFixtureSource::new()
            .with_fixture("Arsenal", "Chelsea", fixture_at("Arsenal", "Chelsea", 1, 0, KICKOFF));
        let calls = source.calls();
        locator(source)
            .find_match("Arsenal", "Chelsea", KICKOFF, KICKOFF)
            .await
            .unwrap();
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn uses_pinned_season() {
        let source = MockFixtureSource::new();
        let calls = source.calls();
        locator(source)
            .find_match("Arsenal", "Chelsea", KICKOFF, KICKOFF)
            .await;
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(_, _, season)| season == "2024-2025"));
    }
}
