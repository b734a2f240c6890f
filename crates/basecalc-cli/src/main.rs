//! CLI entry point - the composition root.
//!
//! Initializes logging and environment, parses arguments, and dispatches
//! to command handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use basecalc_cli::{Cli, CliError, Commands, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads `env` attributes
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let outcome: Result<(), CliError> = match command {
        Commands::Serve {
            host,
            port,
            allow_origins,
        } => handlers::serve::execute(host, port, allow_origins)
            .await
            .map_err(CliError::from),
        Commands::Calc {
            operation,
            num1,
            num2,
            system,
        } => handlers::calc::execute(&operation, num1, num2, system).map(|result| {
            println!("{result}");
        }),
    };

    if let Err(e) = outcome {
        tracing::error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }

    Ok(())
}
