//! Inbound adapters (driving side).
//!
//! - [`cli`] - Command-line entry points
//! - [`jsonl`] - JSON-lines market event source (file or stdin)

pub mod cli;
pub mod jsonl;
