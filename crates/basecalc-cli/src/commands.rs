//! Commands enum.
//!
//! This module defines the available commands for the CLI tool.

use basecalc_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT};
use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP calculator server
    Serve {
        /// Interface to bind
        #[arg(long, env = "BASECALC_HOST", default_value = DEFAULT_HOST)]
        host: String,
        /// Port to listen on
        #[arg(short, long, env = "BASECALC_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Restrict CORS to these origins (repeatable; all origins when omitted)
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },

    /// Evaluate one operation and print the result
    Calc {
        /// Operation: add, subtract, multiply, divide or modulus
        operation: String,
        /// First operand, written in decimal
        #[arg(allow_negative_numbers = true)]
        num1: f64,
        /// Second operand, written in decimal
        #[arg(allow_negative_numbers = true)]
        num2: f64,
        /// Number system: decimal, binary, octal or hexadecimal
        #[arg(short, long)]
        system: Option<String>,
    },
}
