//! `AppCore` - the primary application facade.
//!
//! Adapters (CLI, Web) receive an `AppCore` instance and use it to access
//! all functionality.

use std::sync::Arc;

use crate::ports::{ChartRendererPort, UsageRecorder, UsageSource};
use crate::usage_log::InMemoryUsageLog;

use super::{Calculator, UsageReportService};

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete
/// implementations of the ports.
///
/// # Example
///
/// ```ignore
/// let log = Arc::new(InMemoryUsageLog::new());
/// let core = AppCore::new(log.clone(), log, Arc::new(PieChartRenderer::new()));
///
/// let result = core.calculator().calculate(Operation::Add, &request)?;
/// let png = core.usage().render_chart().await?;
/// ```
pub struct AppCore {
    calculator: Calculator,
    usage: UsageReportService,
}

impl AppCore {
    /// Create a new `AppCore` from explicit ports.
    pub fn new(
        recorder: Arc<dyn UsageRecorder>,
        source: Arc<dyn UsageSource>,
        renderer: Arc<dyn ChartRendererPort>,
    ) -> Self {
        Self {
            calculator: Calculator::new(recorder),
            usage: UsageReportService::new(source, renderer),
        }
    }

    /// Create an `AppCore` backed by a fresh in-memory usage log.
    pub fn in_memory(renderer: Arc<dyn ChartRendererPort>) -> Self {
        let log = Arc::new(InMemoryUsageLog::new());
        Self::new(log.clone(), log, renderer)
    }

    /// Access the calculator service.
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Access the usage report service.
    pub const fn usage(&self) -> &UsageReportService {
        &self.usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NumberSystem, Operation, OperationRequest};
    use crate::ports::MockChartRendererPort;

    #[test]
    fn test_in_memory_core_shares_log() {
        let core = AppCore::in_memory(Arc::new(MockChartRendererPort::new()));
        core.calculator()
            .calculate(
                Operation::Subtract,
                &OperationRequest::new(5.0, 3.0).with_system("binary"),
            )
            .unwrap_err();
        core.calculator()
            .calculate(
                Operation::Subtract,
                &OperationRequest::new(11.0, 1.0).with_system("binary"),
            )
            .unwrap();

        let summary = core.usage().summary();
        assert_eq!(summary.total, 1);
        assert_eq!(summary.systems[0].system, NumberSystem::Binary);
    }
}
