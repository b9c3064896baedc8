use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::HoldersError;
use crate::models::report::HoldersReport;
use crate::traits::report_handler::ReportHandler;

/// Writes each report to a JSON file, replacing the previous one
pub struct JsonReportHandler {
    path: PathBuf,
}

impl JsonReportHandler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn write(&self, report: &HoldersReport) -> Result<(), HoldersError> {
        let json = serde_json::to_string_pretty(report)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl ReportHandler for JsonReportHandler {
    async fn handle_report(&self, report: &HoldersReport) -> anyhow::Result<()> {
        self.write(report).await?;
        info!("Wrote report to {}", self.path.display());
        Ok(())
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        warn!("No report written to {}: {}", self.path.display(), error);
    }
}
