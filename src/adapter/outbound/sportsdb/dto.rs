//! TheSportsDB `searchevents.php` response types.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::domain::Fixture;

/// Top-level search response. `event` is `null` when nothing matches.
#[derive(Debug, Deserialize)]
pub struct SearchEventsResponse {
    #[serde(default)]
    pub event: Option<Vec<EventRecord>>,
}

impl SearchEventsResponse {
    /// Only the first record is consulted.
    pub fn first(self) -> Option<EventRecord> {
        self.event.and_then(|events| events.into_iter().next())
    }
}

/// One event record. Scores arrive as strings, numbers or `null`.
#[derive(Debug, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "strEvent", default)]
    pub name: Option<String>,
    #[serde(rename = "strHomeTeam", default)]
    pub home_team: Option<String>,
    #[serde(rename = "strAwayTeam", default)]
    pub away_team: Option<String>,
    #[serde(rename = "intHomeScore", default, deserialize_with = "score")]
    pub home_score: Option<u32>,
    #[serde(rename = "intAwayScore", default, deserialize_with = "score")]
    pub away_score: Option<u32>,
    #[serde(rename = "strTimestamp", default)]
    pub timestamp: Option<String>,
    #[serde(rename = "dateEvent", default)]
    pub date: Option<String>,
    #[serde(rename = "strTime", default)]
    pub time: Option<String>,
    #[serde(rename = "strStatus", default)]
    pub status: Option<String>,
}

impl EventRecord {
    /// Kickoff instant.
    ///
    /// `strTimestamp` is tried as RFC 3339, then as a naive UTC timestamp;
    /// otherwise `dateEvent` plus `strTime` (midnight if the time is absent).
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        if let Some(ts) = non_empty(self.timestamp.as_deref()) {
            if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
                return Some(dt.with_timezone(&Utc));
            }
            if let Ok(naive) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S") {
                return Some(naive.and_utc());
            }
        }

        let date = NaiveDate::parse_from_str(non_empty(self.date.as_deref())?, "%Y-%m-%d").ok()?;
        let time = non_empty(self.time.as_deref())
            .and_then(|t| t.get(..8))
            .and_then(|t| NaiveTime::parse_from_str(t, "%H:%M:%S").ok())
            .unwrap_or(NaiveTime::MIN);
        Some(date.and_time(time).and_utc())
    }

    /// Convert to a finished [`Fixture`].
    ///
    /// Returns `None` unless both teams, both scores and a kickoff are
    /// present; an unplayed fixture cannot settle a market.
    pub fn into_fixture(self) -> Option<Fixture> {
        let kickoff = self.kickoff()?;
        Some(Fixture {
            home_team: self.home_team.filter(|t| !t.is_empty())?,
            away_team: self.away_team.filter(|t| !t.is_empty())?,
            home_score: self.home_score?,
            away_score: self.away_score?,
            kickoff,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScoreValue {
    Number(u32),
    Text(String),
}

fn score<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<ScoreValue>::deserialize(deserializer)? {
        Some(ScoreValue::Number(n)) => Some(n),
        Some(ScoreValue::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}
