//! Structured intent extracted from a market title.

use serde::Serialize;
use serde_json::{Map, Value};

/// The structured reading of a market question.
///
/// Always names exactly two teams, in the order they appear in the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedIntent {
    /// Title the intent was extracted from, kept for the resolution prompt.
    pub query: String,
    pub teams: [String; 2],
    /// Free-text label such as "Match Winner" or "Total Goals".
    pub prediction_type: String,
    /// Reserved; carried through the pipeline but not interpreted.
    pub additional_details: Map<String, Value>,
}

impl ParsedIntent {
    #[must_use]
    pub fn new(
        query: impl Into<String>,
        teams: [String; 2],
        prediction_type: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            teams,
            prediction_type: prediction_type.into(),
            additional_details: Map::new(),
        }
    }

    #[must_use]
    pub fn first_team(&self) -> &str {
        &self.teams[0]
    }

    #[must_use]
    pub fn second_team(&self) -> &str {
        &self.teams[1]
    }
}

/// Home/away assignment used to look up a fixture.
///
/// `{home_team, away_team}` is always a permutation of the intent's teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub home_team: String,
    pub away_team: String,
    pub prediction_type: String,
}

impl SearchParams {
    /// Treat the first-listed team as home.
    #[must_use]
    pub fn first_listed_is_home(intent: &ParsedIntent) -> Self {
        Self {
            home_team: intent.teams[0].clone(),
            away_team: intent.teams[1].clone(),
            prediction_type: intent.prediction_type.clone(),
        }
    }

    /// True if the pair is the intent's teams in some order.
    #[must_use]
    pub fn is_permutation_of(&self, intent: &ParsedIntent) -> bool {
        let [a, b] = &intent.teams;
        (self.home_team == *a && self.away_team == *b)
            || (self.home_team == *b && self.away_team == *a)
    }
}
