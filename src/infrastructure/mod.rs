//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration, component wiring and the listener's
//! lifecycle.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`orchestration`] - Runtime orchestration
//! - [`supervisor`] - Listener restarts with backoff

pub mod bootstrap;
pub mod config;
pub mod orchestration;
pub mod supervisor;
