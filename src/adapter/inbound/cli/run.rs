//! Handler for the `run` command.

use std::path::Path;

use tokio::sync::watch;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::config::load_or_default;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::orchestration::orchestrator::{Orchestrator, RunRequest};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a component cannot be
/// built, or the supervisor gives up on the event source.
pub async fn execute(
    config_path: &Path,
    args: &RunArgs,
    shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let mut config = load_or_default(config_path)?;
    if args.dry_run {
        config.dry_run = true;
    }
    config.init_logging();

    output::section("quintus-oracle");
    output::field("Version", env!("CARGO_PKG_VERSION"));
    output::field(
        "Events",
        args.events
            .as_ref()
            .map_or_else(|| "stdin".to_string(), |p| p.display().to_string()),
    );
    if config.dry_run {
        output::warning("Dry-run mode enabled - resolutions will only be logged");
    } else if let Some(out) = &args.out {
        output::field("Relay file", out.display());
    } else {
        output::warning("No --out file given - resolutions will only be logged");
    }

    let request = RunRequest {
        events: args.events.clone(),
        out: args.out.clone(),
    };
    let stats = Orchestrator::run_with_shutdown(config, request, shutdown).await?;

    output::section("Summary");
    output::field("Received", stats.received);
    output::field("Submitted", stats.submitted);
    output::field("Failed", stats.failed);
    output::field("Submit errors", stats.submit_errors);
    Ok(())
}
