//! LLM adapter modules.
//!
//! Implementations of the [`Llm`](crate::port::outbound::llm::Llm) trait for
//! Anthropic Claude and OpenAI.

pub mod anthropic;
pub mod openai;

pub use anthropic::Anthropic;
pub use openai::OpenAi;
