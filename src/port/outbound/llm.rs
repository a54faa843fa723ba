//! LLM completion port.
//!
//! The inference service is a black box: one prompt in, one text response
//! out. No conversation state is kept between calls.

use async_trait::async_trait;

use crate::error::Result;

/// Client for large language model text completion.
///
/// Implementations wrap specific providers (Anthropic, OpenAI) and handle
/// authentication and response decoding.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a single-turn completion request and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response body cannot be
    /// decoded.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
