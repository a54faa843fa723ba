//! Pipeline throttling and external call budget.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::policy::CallPolicy;

/// Listener pacing and the per-call policy shared by every stage.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Pause after each market (milliseconds), to stay under inference
    /// rate limits.
    #[serde(default = "default_inter_run_delay_ms")]
    pub inter_run_delay_ms: u64,

    #[serde(default)]
    pub call: CallConfig,
}

impl PipelineConfig {
    #[must_use]
    pub const fn inter_run_delay(&self) -> Duration {
        Duration::from_millis(self.inter_run_delay_ms)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            inter_run_delay_ms: default_inter_run_delay_ms(),
            call: CallConfig::default(),
        }
    }
}

/// Timeout and retry budget for one inference or statistics call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallConfig {
    /// Per-attempt timeout (seconds).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Total attempts including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Pause between attempts (milliseconds).
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl CallConfig {
    #[must_use]
    pub const fn policy(&self) -> CallPolicy {
        CallPolicy::new(
            Duration::from_secs(self.timeout_secs),
            self.max_attempts,
            Duration::from_millis(self.retry_delay_ms),
        )
    }
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

const fn default_inter_run_delay_ms() -> u64 {
    5000
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_retry_delay_ms() -> u64 {
    1000
}
