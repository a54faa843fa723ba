use clap::Parser;
use tokio::signal;
use tokio::sync::watch;
use tracing::info;

use quintus_oracle::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use quintus_oracle::adapter::inbound::cli::output::{self, OutputConfig};
use quintus_oracle::adapter::inbound::cli::{config, resolve, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let result = match &cli.command {
        Commands::Run(args) => {
            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            tokio::spawn(async move {
                if signal::ctrl_c().await.is_ok() {
                    info!("Ctrl-C received, shutting down");
                    let _ = shutdown_tx.send(true);
                }
            });
            run::execute(&cli.config, args, shutdown_rx).await
        }
        Commands::Resolve(args) => resolve::execute(&cli.config, args).await,
        Commands::Config(ConfigCommand::Show) => config::execute_show(&cli.config),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&cli.config),
    };

    if let Err(e) = result {
        let err = anyhow::Error::new(e);
        output::error(&format!("{err:#}"));
        std::process::exit(1);
    }
    Ok(())
}
