//! Chart rendering port.
//!
//! The core aggregates the usage log and hands per-system counts to a
//! renderer; how pixels are produced is the adapter's business.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::SystemFrequency;

/// Errors from chart rendering.
///
/// These are server-side failures, distinct from input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The drawing backend failed.
    #[error("Render failed: {0}")]
    Render(String),

    /// Temporary storage for the encoded image failed.
    #[error("IO error: {0}")]
    Io(String),

    /// Internal error (e.g. the render task panicked).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Renders a frequency pie chart.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChartRendererPort: Send + Sync {
    /// Render one slice per entry, sized by `count`, and return PNG bytes.
    ///
    /// An empty slice yields a valid, blank chart.
    async fn render_pie(&self, frequencies: &[SystemFrequency]) -> Result<Vec<u8>, ChartError>;
}
