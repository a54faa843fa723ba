//! Application services (use cases).
//!
//! The resolution pipeline runs four stages per market, strictly in order:
//!
//! - [`parser`] - Market title to [`ParsedIntent`](crate::domain::ParsedIntent)
//! - [`bridge`] - Home/away assignment, never fails
//! - [`locator`] - Fixture lookup inside the market's time window
//! - [`resolver`] - Score line to a vocabulary outcome
//!
//! [`pipeline`] ties the stages together and [`listener`] drives it from an
//! event source. [`policy`] and [`extract`] hold what the stages share.

pub mod bridge;
pub mod extract;
pub mod listener;
pub mod locator;
pub mod parser;
pub mod pipeline;
pub mod policy;
pub mod resolver;

pub use bridge::TeamOrderResolver;
pub use listener::{Listener, ListenerExit, ListenerStats};
pub use locator::FixtureLocator;
pub use parser::QueryParser;
pub use pipeline::{FailureReason, PipelineFailure, PipelineStage, ResolutionPipeline};
pub use policy::{CallPolicy, FallbackPolicy};
pub use resolver::OutcomeResolver;
