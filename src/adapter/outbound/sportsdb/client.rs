//! TheSportsDB REST client.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;
use url::Url;

use super::dto::SearchEventsResponse;
use crate::domain::{Fixture, Season};
use crate::error::{Error, Result};
use crate::infrastructure::config::sports::SportsConfig;
use crate::port::outbound::sports::FixtureSource;

/// Free public key, rate limited but sufficient for event search.
const PUBLIC_API_KEY: &str = "3";

/// HTTP client for TheSportsDB event search.
pub struct SportsDb {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl SportsDb {
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build from config, reading `SPORTSDB_API_KEY` (public key if unset).
    #[must_use]
    pub fn from_config(config: &SportsConfig) -> Self {
        let api_key = std::env::var("SPORTSDB_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| PUBLIC_API_KEY.to_string());
        Self::new(config.base_url.clone(), api_key)
    }

    fn search_url(&self, team_a: &str, team_b: &str, season: Season) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/{}/searchevents.php",
            self.base_url.trim_end_matches('/'),
            self.api_key
        ))?;
        url.query_pairs_mut()
            .append_pair("e", &event_name(team_a, team_b))
            .append_pair("s", &season.to_string());
        Ok(url)
    }
}

/// TheSportsDB event key for a directional pairing.
#[must_use]
pub fn event_name(team_a: &str, team_b: &str) -> String {
    format!("{team_a}_vs_{team_b}")
}

#[async_trait]
impl FixtureSource for SportsDb {
    fn name(&self) -> &'static str {
        "sportsdb"
    }

    async fn search_fixture(
        &self,
        team_a: &str,
        team_b: &str,
        season: Season,
    ) -> Result<Option<Fixture>> {
        let url = self.search_url(team_a, team_b, season)?;
        debug!(event = %event_name(team_a, team_b), %season, "Searching fixture");

        let response = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Connection(e.to_string()))?
            .json::<SearchEventsResponse>()
            .await?;

        let Some(record) = response.first() else {
            return Ok(None);
        };
        let status = record.status.clone().unwrap_or_default();
        let fixture = record.into_fixture();
        if fixture.is_none() {
            debug!(%status, "Event found but has no final score");
        }
        Ok(fixture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_key_event_and_season() {
        let client = SportsDb::new("https://www.thesportsdb.com/api/v1/json/", "3");
        let url = client
            .search_url("Arsenal", "Crystal Palace", Season::starting(2024))
            .unwrap();

        assert_eq!(url.path(), "/api/v1/json/3/searchevents.php");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("e".to_string(), "Arsenal_vs_Crystal Palace".to_string()),
                ("s".to_string(), "2024-2025".to_string()),
            ]
        );
    }

    #[test]
    fn event_name_is_directional() {
        assert_eq!(event_name("Arsenal", "Chelsea"), "Arsenal_vs_Chelsea");
        assert_eq!(event_name("Chelsea", "Arsenal"), "Chelsea_vs_Arsenal");
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let client = SportsDb::new("not a url", "3");
        let result = client.search_url("A", "B", Season::starting(2024));
        assert!(matches!(result, Err(Error::Url(_))));
    }

    #[test]
    fn public_key_is_default() {
        std::env::remove_var("SPORTSDB_API_KEY");
        let client = SportsDb::from_config(&SportsConfig::default());
        assert_eq!(client.api_key, PUBLIC_API_KEY);
        assert_eq!(client.name(), "sportsdb");
    }
}

/// Integration tests against the live public API.
/// Run with: `cargo test --features integration-tests -- --ignored`
#[cfg(all(test, feature = "integration-tests"))]
mod integration_tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn finds_known_fixture() {
        let client = SportsDb::new("https://www.thesportsdb.com/api/v1/json", PUBLIC_API_KEY);

        let fixture = client
            .search_fixture("Manchester United", "Nottingham Forest", Season::starting(2024))
            .await
            .expect("API call failed")
            .expect("fixture exists");

        assert_eq!(fixture.home_score, 2);
        assert_eq!(fixture.away_score, 3);
    }
}
