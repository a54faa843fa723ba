//! Sporting fixtures and the time window they must fall in.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::DomainError;

/// A finished real-world match, as reported by the statistics source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub kickoff: DateTime<Utc>,
}

impl Fixture {
    /// Kickoff as epoch seconds.
    #[must_use]
    pub fn kickoff_epoch(&self) -> i64 {
        self.kickoff.timestamp()
    }
}

/// Inclusive `[opens_at, closes_at]` range in epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    opens_at: i64,
    closes_at: i64,
}

impl TimeWindow {
    /// # Errors
    ///
    /// Returns [`DomainError::InvertedWindow`] when `opens_at > closes_at`.
    pub fn try_new(opens_at: i64, closes_at: i64) -> Result<Self, DomainError> {
        if opens_at > closes_at {
            return Err(DomainError::InvertedWindow {
                opens_at,
                closes_at,
            });
        }
        Ok(Self {
            opens_at,
            closes_at,
        })
    }

    #[must_use]
    pub const fn opens_at(&self) -> i64 {
        self.opens_at
    }

    #[must_use]
    pub const fn closes_at(&self) -> i64 {
        self.closes_at
    }

    /// Both bounds are inclusive.
    #[must_use]
    pub const fn contains(&self, timestamp: i64) -> bool {
        self.opens_at <= timestamp && timestamp <= self.closes_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_inclusive_at_both_ends() {
        let window = TimeWindow::try_new(100, 200).unwrap();
        assert!(window.contains(100));
        assert!(window.contains(150));
        assert!(window.contains(200));
        assert!(!window.contains(99));
        assert!(!window.contains(201));
    }

    #[test]
    fn zero_width_window_contains_its_instant() {
        let window = TimeWindow::try_new(100, 100).unwrap();
        assert!(window.contains(100));
        assert!(!window.contains(101));
    }

    #[test]
    fn inverted_window_is_rejected() {
        assert_eq!(
            TimeWindow::try_new(5, 4),
            Err(DomainError::InvertedWindow {
                opens_at: 5,
                closes_at: 4
            })
        );
    }

    #[test]
    fn kickoff_epoch_matches_timestamp() {
        let kickoff = DateTime::from_timestamp(1_733_592_600, 0).unwrap();
        let fixture = Fixture {
            home_team: "Manchester United".into(),
            away_team: "Nottingham Forest".into(),
            home_score: 2,
            away_score: 3,
            kickoff,
        };
        assert_eq!(fixture.kickoff_epoch(), 1_733_592_600);
    }
}
