//! Command handlers.
//!
//! Each submodule implements one CLI command.

pub mod calc;
pub mod serve;
