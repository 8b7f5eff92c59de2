//! CLI entry point.
//!
//! Parses arguments, bootstraps the `CliContext` and routes each command to
//! its handler. Errors are mapped to sysexits-style exit codes.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use abdm_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() {
    // Load environment variables before parsing so `.env` can set ABDM_*
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(CliError::from_anyhow(&err).exit_code());
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Paths => handlers::paths::execute()?,
        Commands::Settings { command } => {
            let ctx = bootstrap(CliConfig::new(cli.backend)).await?;
            handlers::settings::execute(&ctx, command).await?;
        }
    }

    Ok(())
}
