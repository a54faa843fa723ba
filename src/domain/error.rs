//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors when an input would
//! violate a domain invariant.
//!
//! # Examples
//!
//! ```
//! use quintus_oracle::domain::error::DomainError;
//! use quintus_oracle::domain::market::MarketQuery;
//!
//! let result = MarketQuery::try_new("Arsenal vs Chelsea winner?", vec!["Arsenal".into()]);
//! assert!(matches!(result, Err(DomainError::TooFewOutcomes { count: 1 })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Markets need at least two outcomes to be settleable.
    #[error("market needs at least 2 outcomes, got {count}")]
    TooFewOutcomes {
        /// Number of outcomes supplied.
        count: usize,
    },

    /// The market title carries the whole question and cannot be blank.
    #[error("market title cannot be empty")]
    EmptyTitle,

    /// A time window must not close before it opens.
    #[error("window closes at {closes_at} before it opens at {opens_at}")]
    InvertedWindow {
        /// Window start, epoch seconds.
        opens_at: i64,
        /// Window end, epoch seconds.
        closes_at: i64,
    },
}
