//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! - [`llm`]: Text completion from an inference service
//! - [`sports`]: Fixture lookup against a statistics API
//! - [`submitter`]: Hand-off of a settled outcome to the chain relay

pub mod llm;
pub mod sports;
pub mod submitter;
