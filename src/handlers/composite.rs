use std::sync::Arc;

use async_trait::async_trait;

use crate::models::report::HoldersReport;
use crate::traits::report_handler::ReportHandler;

/// Composite report handler that forwards to multiple handlers in order
pub struct CompositeReportHandler {
    handlers: Vec<Arc<dyn ReportHandler>>,
}

impl CompositeReportHandler {
    /// Create a new composite report handler
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Add a handler to the composite
    pub fn add_handler(&mut self, handler: Arc<dyn ReportHandler>) {
        self.handlers.push(handler);
    }
}

impl Default for CompositeReportHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportHandler for CompositeReportHandler {
    /// Stops at the first handler that fails
    async fn handle_report(&self, report: &HoldersReport) -> anyhow::Result<()> {
        for handler in &self.handlers {
            handler.handle_report(report).await?;
        }
        Ok(())
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        for handler in &self.handlers {
            handler.handle_error(error).await;
        }
    }
}
