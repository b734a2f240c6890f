//! Usage reporting - aggregation and chart rendering.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{NumberSystem, SystemFrequency, UsageRecord, UsageSummary};
use crate::ports::{ChartError, ChartRendererPort, UsageSource};

/// Count records per number system.
///
/// Output is in canonical system order and omits systems with no records.
pub fn aggregate(records: &[UsageRecord]) -> Vec<SystemFrequency> {
    let mut counts: BTreeMap<NumberSystem, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.system).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(system, count)| SystemFrequency { system, count })
        .collect()
}

/// Service for reading back the usage log.
pub struct UsageReportService {
    source: Arc<dyn UsageSource>,
    renderer: Arc<dyn ChartRendererPort>,
}

impl UsageReportService {
    /// Create a new usage report service.
    pub fn new(source: Arc<dyn UsageSource>, renderer: Arc<dyn ChartRendererPort>) -> Self {
        Self { source, renderer }
    }

    /// Per-system request counts.
    pub fn frequencies(&self) -> Vec<SystemFrequency> {
        aggregate(&self.source.snapshot())
    }

    /// Per-system counts plus their total.
    pub fn summary(&self) -> UsageSummary {
        UsageSummary::from_frequencies(self.frequencies())
    }

    /// Render the frequency pie chart as PNG bytes.
    pub async fn render_chart(&self) -> Result<Vec<u8>, ChartError> {
        let frequencies = self.frequencies();
        debug!(slices = frequencies.len(), "Rendering usage chart");
        self.renderer.render_pie(&frequencies).await
    }
}
