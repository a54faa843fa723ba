//! LLM provider configuration.
//!
//! One provider serves all three inference-backed stages: query parsing,
//! team ordering and outcome resolution.

use serde::{Deserialize, Serialize};

/// LLM provider configuration.
///
/// API keys are read from environment variables (`ANTHROPIC_API_KEY` or
/// `OPENAI_API_KEY`) at runtime, never from the config file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LlmConfig {
    /// Provider used for every pipeline stage. Defaults to Anthropic.
    #[serde(default)]
    pub provider: LlmProvider,

    /// Used when `provider` is `anthropic`.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Used when `provider` is `openai`.
    #[serde(default)]
    pub openai: OpenAiConfig,
}

impl LlmConfig {
    /// Temperature of the active provider.
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        match self.provider {
            LlmProvider::Anthropic => self.anthropic.temperature,
            LlmProvider::OpenAi => self.openai.temperature,
        }
    }
}

/// LLM provider selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Anthropic Claude models.
    #[default]
    Anthropic,
    /// OpenAI GPT models.
    OpenAi,
}

/// Anthropic-specific configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnthropicConfig {
    /// Defaults to "claude-3-5-haiku-latest".
    #[serde(default = "default_anthropic_model")]
    pub model: String,

    /// Sampling temperature. Defaults to 0.0 so reruns resolve alike.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens in the response. Defaults to 1000.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            model: default_anthropic_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// OpenAI-specific configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    /// Defaults to "gpt-4o-mini".
    #[serde(default = "default_openai_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: default_openai_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_anthropic_model() -> String {
    "claude-3-5-haiku-latest".into()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".into()
}

const fn default_temperature() -> f64 {
    0.0
}

const fn default_max_tokens() -> usize {
    1000
}
