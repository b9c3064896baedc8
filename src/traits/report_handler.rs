use async_trait::async_trait;

use crate::models::report::HoldersReport;

/// Handler for finished holder reports
#[async_trait]
pub trait ReportHandler: Send + Sync {
    /// Handle a completed report
    async fn handle_report(&self, report: &HoldersReport) -> anyhow::Result<()>;

    /// Handle a failed run
    async fn handle_error(&self, error: &anyhow::Error);
}
