//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the number-base calculator.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "basecalc")]
#[command(about = "Arithmetic over decimal, binary, octal and hexadecimal numbers")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_verbose() {
        let cli = Cli::parse_from(["basecalc", "--verbose", "serve"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Serve { .. })));
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::parse_from(["basecalc"]);
        assert!(cli.command.is_none());
    }
}
