//! Quintus oracle - automated resolution of peer-created sports prediction markets.
//!
//! A market is a free-text question ("Will Arsenal beat Chelsea?",
//! "Over 2.5 goals in Real Madrid vs Barcelona?") with a fixed outcome
//! vocabulary and a betting window. The oracle settles it in four stages:
//!
//! 1. **Parse** the title into two teams and a prediction type (LLM).
//! 2. **Bridge** the teams into a home/away search order (LLM, never fails).
//! 3. **Locate** the fixture that kicked off inside the window (sports API).
//! 4. **Resolve** the final score into exactly one vocabulary outcome (LLM).
//!
//! # Architecture
//!
//! - [`domain`] - Markets, intents, fixtures, score facts, seasons
//! - [`port`] - Seams to the LLM, the sports API and the chain
//! - [`application`] - The four stages, the pipeline and the listener
//! - [`adapter`] - Anthropic/OpenAI, TheSportsDB, JSON-lines I/O, the CLI
//! - [`infrastructure`] - Configuration, wiring, supervision
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Mock LLMs, fixture sources and chain collaborators for
//!   integration tests
//! - `integration-tests` - Tests that call the real external APIs

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
