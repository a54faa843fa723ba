//! Handler for the `config` command group.

use std::path::Path;

use tracing::warn;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::llm::LlmProvider;
use crate::infrastructure::config::settings::Config;

/// Load `path`, or fall back to defaults when the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, parsed or
/// validated.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        return Config::load(path);
    }
    warn!(path = %path.display(), "Config file not found, using defaults");
    Ok(Config::default())
}

/// Execute `config show`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = load_or_default(path)?;

    if output::is_json() {
        return output::result(&config);
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    output::field("Dry run", config.dry_run);

    output::section("LLM");
    let (provider, model, key_var) = match config.llm.provider {
        LlmProvider::Anthropic => ("anthropic", &config.llm.anthropic.model, "ANTHROPIC_API_KEY"),
        LlmProvider::OpenAi => ("openai", &config.llm.openai.model, "OPENAI_API_KEY"),
    };
    output::field("Provider", provider);
    output::field("Model", model);
    output::field("Temperature", config.llm.temperature());
    if env_is_set(key_var) {
        output::success(&format!("API key loaded from {key_var}"));
    } else {
        output::warning(&format!("{key_var} not set"));
    }

    output::section("Sports API");
    output::field("Base URL", &config.sports.base_url);
    output::field(
        "Season",
        config
            .sports
            .season()
            .map_or_else(|| "current".to_string(), |season| season.to_string()),
    );
    output::field(
        "API key",
        if env_is_set("SPORTSDB_API_KEY") {
            "SPORTSDB_API_KEY"
        } else {
            "public"
        },
    );

    output::section("Pipeline");
    output::field("Delay", format!("{}ms", config.pipeline.inter_run_delay_ms));
    output::field("Timeout", format!("{}s", config.pipeline.call.timeout_secs));
    output::field("Attempts", config.pipeline.call.max_attempts);

    output::section("Supervisor");
    output::field(
        "Backoff",
        format!(
            "{}ms..{}ms x{}",
            config.supervisor.initial_delay_ms,
            config.supervisor.max_delay_ms,
            config.supervisor.backoff_multiplier
        ),
    );
    output::field("Max failures", config.supervisor.max_consecutive_failures);

    output::section("TOML");
    output::raw(&config.to_toml()?);
    Ok(())
}

/// Execute `config validate`.
///
/// Unlike the other commands, validation requires the file to exist.
///
/// # Errors
///
/// Returns an error if the file is missing or invalid.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    Config::load(path)?;
    output::success("Config file is valid");
    Ok(())
}

fn env_is_set(var: &str) -> bool {
    std::env::var(var).is_ok_and(|value| !value.trim().is_empty())
}
