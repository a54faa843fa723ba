//! Handler for the `resolve` command: the manual resolution path.

use std::path::Path;

use crate::adapter::inbound::cli::command::ResolveArgs;
use crate::adapter::inbound::cli::config::load_or_default;
use crate::adapter::inbound::cli::output;
use crate::domain::MarketQuery;
use crate::error::Result;
use crate::infrastructure::orchestration::orchestrator::Orchestrator;

/// Execute the resolve command, printing the result as JSON on stdout.
///
/// # Errors
///
/// Returns an error if the market is malformed, the configuration is
/// invalid, or the pipeline fails at any stage.
pub async fn execute(config_path: &Path, args: &ResolveArgs) -> Result<()> {
    let config = load_or_default(config_path)?;
    config.init_logging();

    let query = MarketQuery::try_new(args.title.clone(), args.outcomes.clone())?
        .with_description(args.description.clone());

    let result = Orchestrator::resolve(
        &config,
        &query,
        args.bet_deadline,
        args.resolution_deadline,
    )
    .await?;

    output::result(&result)
}
