//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; secrets (`ANTHROPIC_API_KEY`,
//! `OPENAI_API_KEY`, `SPORTSDB_API_KEY`) only ever come from the environment.
//!
//! # Example
//!
//! ```no_run
//! use quintus_oracle::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::llm::LlmConfig;
use super::logging::LoggingConfig;
use super::pipeline::PipelineConfig;
use super::sports::SportsConfig;
use super::supervisor::SupervisorConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Enable dry-run mode.
    ///
    /// When true, resolutions are logged instead of handed to the relay.
    /// Defaults to false.
    #[serde(default)]
    pub dry_run: bool,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// LLM provider used by the parse, bridge and resolve stages.
    #[serde(default)]
    pub llm: LlmConfig,

    /// Fixture statistics API.
    #[serde(default)]
    pub sports: SportsConfig,

    /// Listener pacing and external call budget.
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Listener restart policy.
    #[serde(default)]
    pub supervisor: SupervisorConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., zero call timeout)
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if !self.logging.is_known_format() {
            return Err(invalid("format", "must be \"pretty\" or \"json\""));
        }

        let temperature = self.llm.temperature();
        if !(0.0..=2.0).contains(&temperature) {
            return Err(invalid("temperature", "must be between 0 and 2"));
        }

        if self.sports.base_url.trim().is_empty() {
            return Err(invalid("base_url", "must not be empty"));
        }

        let call = &self.pipeline.call;
        if call.timeout_secs == 0 {
            return Err(invalid("timeout_secs", "must be greater than 0"));
        }
        if call.max_attempts == 0 {
            return Err(invalid("max_attempts", "must be greater than 0"));
        }

        let supervisor = &self.supervisor;
        if supervisor.max_delay_ms < supervisor.initial_delay_ms {
            return Err(invalid("max_delay_ms", "must be >= initial_delay_ms"));
        }
        if !supervisor.backoff_multiplier.is_finite() || supervisor.backoff_multiplier < 1.0 {
            return Err(invalid("backoff_multiplier", "must be a finite value >= 1.0"));
        }
        if supervisor.max_consecutive_failures == 0 {
            return Err(invalid("max_consecutive_failures", "must be greater than 0"));
        }

        Ok(())
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidValue {
                field: "config",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn invalid(field: &'static str, reason: &str) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
    .into()
}
