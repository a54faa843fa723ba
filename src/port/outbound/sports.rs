//! Sports statistics port.

use async_trait::async_trait;

use crate::domain::{Fixture, Season};
use crate::error::Result;

/// Lookup of finished fixtures by team pairing.
///
/// The pairing is directional: `(a, b)` asks for the event the source names
/// "a vs b". Callers that do not know the source's orientation try both.
#[async_trait]
pub trait FixtureSource: Send + Sync {
    /// Return the source name for logging.
    fn name(&self) -> &'static str;

    /// Find the first fixture named `team_a` vs `team_b` in `season`.
    ///
    /// Returns `Ok(None)` when the source has no matching record.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decoding failures.
    async fn search_fixture(
        &self,
        team_a: &str,
        team_b: &str,
        season: Season,
    ) -> Result<Option<Fixture>>;
}
