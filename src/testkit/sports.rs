//! Mock [`FixtureSource`] and fixture builders.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Fixture, Season};
use crate::error::{Error, Result};
use crate::port::outbound::sports::FixtureSource;

/// Build a finished fixture kicking off at `kickoff` epoch seconds.
pub fn fixture_at(home: &str, away: &str, home_score: u32, away_score: u32, kickoff: i64) -> Fixture {
    Fixture {
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_score,
        away_score,
        kickoff: DateTime::<Utc>::from_timestamp(kickoff, 0).unwrap_or_default(),
    }
}

/// In-memory fixture table keyed by directional `(team_a, team_b)`.
///
/// Every lookup is recorded as `(team_a, team_b, season)`.
#[derive(Default)]
pub struct MockFixtureSource {
    fixtures: HashMap<(String, String), Fixture>,
    failing: HashSet<(String, String)>,
    calls: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl MockFixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fixture(mut self, team_a: &str, team_b: &str, fixture: Fixture) -> Self {
        self.fixtures
            .insert((team_a.to_string(), team_b.to_string()), fixture);
        self
    }

    /// Make the `(team_a, team_b)` lookup fail with a transport error.
    pub fn failing_for(mut self, team_a: &str, team_b: &str) -> Self {
        self.failing.insert((team_a.to_string(), team_b.to_string()));
        self
    }

    /// Shared handle to the recorded lookups.
    pub fn calls(&self) -> Arc<Mutex<Vec<(String, String, String)>>> {
        self.calls.clone()
    }
}

#[async_trait]
impl FixtureSource for MockFixtureSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn search_fixture(
        &self,
        team_a: &str,
        team_b: &str,
        season: Season,
    ) -> Result<Option<Fixture>> {
        self.calls
            .lock()
            .unwrap()
            .push((team_a.to_string(), team_b.to_string(), season.to_string()));

        let key = (team_a.to_string(), team_b.to_string());
        if self.failing.contains(&key) {
            return Err(Error::Connection(format!("lookup {team_a}_vs_{team_b} failed")));
        }
        Ok(self.fixtures.get(&key).cloned())
    }
}
