//! Application orchestration.
//!
//! Runtime wiring and lifecycle management for the listener and the
//! one-shot resolve path.

pub mod orchestrator;
mod runtime;
