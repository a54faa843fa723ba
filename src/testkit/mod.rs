//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`llm`]: Mock [`Llm`](crate::port::outbound::llm::Llm) clients:
//!   `MockLlm`, `ScriptedLlm`, `FailingLlm`.
//! - [`sports`]: `MockFixtureSource` and fixture builders.
//! - [`chain`]: `VecEventSource`, `RecordingSubmitter` and event builders.
//! - [`config`]: Canonical test configurations (fast supervisor, call policy).

pub mod chain;
pub mod config;
pub mod llm;
pub mod sports;
