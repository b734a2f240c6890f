//! Serve command handler.
//!
//! Starts the HTTP calculator server and runs until Ctrl+C.

use anyhow::Result;
use basecalc_axum::{ServerConfig, start_server};

/// Build the server configuration from command arguments.
pub fn build_config(host: String, port: u16, allow_origins: Vec<String>) -> ServerConfig {
    let config = ServerConfig::with_defaults().with_host(host).with_port(port);
    if allow_origins.is_empty() {
        config
    } else {
        config.with_allowed_origins(allow_origins)
    }
}

/// Execute the serve command.
pub async fn execute(host: String, port: u16, allow_origins: Vec<String>) -> Result<()> {
    let config = build_config(host, port, allow_origins);
    tracing::info!(addr = %config.addr(), cors = ?config.cors, "Starting basecalc server");
    start_server(config).await
}
