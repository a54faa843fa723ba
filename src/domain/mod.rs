//! Exchange- and provider-agnostic domain types.
//!
//! - [`market`] - Market questions and listener events
//! - [`intent`] - Structured intent and fixture search parameters
//! - [`fixture`] - Fixtures and inclusive time windows
//! - [`score`] - Deterministic facts computed from a score line
//! - [`season`] - Football season labels
//! - [`resolution`] - Resolution results and vocabulary matching

pub mod error;
pub mod fixture;
pub mod id;
pub mod intent;
pub mod market;
pub mod resolution;
pub mod score;
pub mod season;

pub use error::DomainError;
pub use fixture::{Fixture, TimeWindow};
pub use id::MarketId;
pub use intent::{ParsedIntent, SearchParams};
pub use market::{MarketEvent, MarketQuery};
pub use resolution::{match_outcome, ResolutionResult};
pub use score::{goal_lines, ScoreFacts, Side};
pub use season::Season;
