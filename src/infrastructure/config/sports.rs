//! Sports statistics API configuration.

use serde::{Deserialize, Serialize};

use crate::domain::Season;

/// TheSportsDB settings. The API key comes from `SPORTSDB_API_KEY`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SportsConfig {
    /// API root without the key segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Start year of the season to search, e.g. `2024` for `2024-2025`.
    ///
    /// Unset means the season containing today's date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_override: Option<i32>,
}

impl SportsConfig {
    #[must_use]
    pub fn season(&self) -> Option<Season> {
        self.season_override.map(Season::starting)
    }
}

impl Default for SportsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            season_override: None,
        }
    }
}

fn default_base_url() -> String {
    "https://www.thesportsdb.com/api/v1/json".into()
}
