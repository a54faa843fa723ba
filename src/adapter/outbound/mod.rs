//! Outbound adapters (driven side).
//!
//! - [`llm`] - Anthropic and OpenAI completion clients
//! - [`sportsdb`] - TheSportsDB fixture search
//! - [`submitter`] - Resolution hand-off (dry-run log, JSON-lines relay file)

pub mod llm;
pub mod sportsdb;
pub mod submitter;
