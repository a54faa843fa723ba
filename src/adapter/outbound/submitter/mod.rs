//! Resolution submitters.

pub mod jsonl;
pub mod log;

pub use jsonl::JsonlSubmitter;
pub use log::LogSubmitter;
