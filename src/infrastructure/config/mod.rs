//! Infrastructure configuration modules.

pub mod llm;
pub mod logging;
pub mod pipeline;
pub mod settings;
pub mod sports;
pub mod supervisor;
