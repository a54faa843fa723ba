//! Market inputs to the resolution pipeline.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::fixture::TimeWindow;
use super::id::MarketId;

/// A market question and its fixed outcome vocabulary.
///
/// Immutable for the duration of one pipeline run. The outcome strings are
/// the exact values the oracle contract accepts, so they are never trimmed
/// or normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketQuery {
    title: String,
    description: Option<String>,
    outcomes: Vec<String>,
}

impl MarketQuery {
    /// Create a validated market query.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyTitle`] for a blank title and
    /// [`DomainError::TooFewOutcomes`] when fewer than two outcomes are given.
    pub fn try_new(title: impl Into<String>, outcomes: Vec<String>) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        if outcomes.len() < 2 {
            return Err(DomainError::TooFewOutcomes {
                count: outcomes.len(),
            });
        }
        Ok(Self {
            title,
            description: None,
            outcomes,
        })
    }

    /// Attach an optional free-text description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }
}

/// A "market ready for resolution" notification from the chain listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketEvent {
    #[serde(alias = "marketId")]
    pub market_id: MarketId,
    #[serde(alias = "betTitle")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub outcomes: Vec<String>,
    /// Betting close, epoch seconds.
    #[serde(alias = "betDeadline")]
    pub bet_deadline: i64,
    /// Resolution open, epoch seconds.
    #[serde(alias = "resolutionDeadline")]
    pub resolution_deadline: i64,
}

impl MarketEvent {
    /// Build the pipeline query for this event.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the title or outcomes are invalid.
    pub fn query(&self) -> Result<MarketQuery, DomainError> {
        Ok(MarketQuery::try_new(self.title.clone(), self.outcomes.clone())?
            .with_description(self.description.clone()))
    }

    /// The window a fixture must kick off in to settle this market.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvertedWindow`] if the deadlines are reversed.
    pub fn window(&self) -> Result<TimeWindow, DomainError> {
        TimeWindow::try_new(self.bet_deadline, self.resolution_deadline)
    }
}
