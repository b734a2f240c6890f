//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::sync::Arc;

use anyhow::Result;
use basecalc_chart::{ChartSize, PieChartRenderer};
use basecalc_core::{AppCore, InMemoryUsageLog};

/// Default listen address, all interfaces.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Canvas size of the usage chart.
    pub chart_size: ChartSize,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            chart_size: ChartSize::default(),
            cors: CorsConfig::default(),
        }
    }

    /// Set the interface to bind.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the chart canvas size.
    #[must_use]
    pub const fn with_chart_size(mut self, size: ChartSize) -> Self {
        self.chart_size = size;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// `host:port` listen address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    /// Wrap an already assembled core.
    pub fn new(core: AppCore) -> Self {
        Self {
            core: Arc::new(core),
        }
    }
}

/// Assemble the core with an in-memory usage log and the pie chart renderer.
///
/// The usage log starts empty and lives as long as the returned context.
pub fn bootstrap(config: &ServerConfig) -> AxumContext {
    let log = Arc::new(InMemoryUsageLog::new());
    let renderer = Arc::new(PieChartRenderer::with_size(config.chart_size));

    tracing::debug!(
        target: "basecalc.bootstrap",
        chart_width = config.chart_size.width,
        chart_height = config.chart_size.height,
        cors = ?config.cors,
        "Axum bootstrap complete"
    );

    AxumContext::new(AppCore::new(log.clone(), log, renderer))
}

/// Resolves when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// Start the web server and run until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config);
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("basecalc web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
