//! Port definitions (trait abstractions) for external collaborators.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No transport or image-library types in any signature
//! - The dispatcher only appends through `UsageRecorder`; reading goes
//!   through `UsageSource`
//! - Rendering is async so adapters can move drawing off the runtime threads

pub mod chart_renderer;
pub mod usage_recorder;

pub use chart_renderer::{ChartError, ChartRendererPort};
pub use usage_recorder::{NoopUsageRecorder, UsageRecorder, UsageSource};

#[cfg(test)]
pub use chart_renderer::MockChartRendererPort;
#[cfg(test)]
pub use usage_recorder::{MockUsageRecorder, MockUsageSource};
