#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
