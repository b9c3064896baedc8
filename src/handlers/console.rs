use async_trait::async_trait;
use tracing::{error, info};

use crate::models::report::HoldersReport;
use crate::traits::report_handler::ReportHandler;

/// Console logging report handler
pub struct ConsoleReportHandler;

impl ConsoleReportHandler {
    /// Create a new console report handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleReportHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportHandler for ConsoleReportHandler {
    async fn handle_report(&self, report: &HoldersReport) -> anyhow::Result<()> {
        info!("{}", "=".repeat(80));
        info!("TOKEN HOLDERS");
        info!("{}", "=".repeat(80));

        info!("Token Address: {}", report.token_address);
        info!(
            "Blocks: {} - {}",
            report.block_range.start_block, report.block_range.end_block
        );
        info!(
            "Timestamp: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        info!("Total Holders: {}", report.total_holders);

        if report.is_empty() {
            info!("No holders returned for this token");
        } else {
            info!("");
            info!("Top {} Holders:", report.top_holders.len());
            info!("{}", "-".repeat(80));
            for (i, holder) in report.top_holders.iter().enumerate() {
                info!("{}. {}", i + 1, holder.address);
                info!("   Balance: {}", holder.balance);
            }
            info!("{}", "-".repeat(80));
        }

        info!(
            "Major Holders (>={} tokens): {}",
            report.min_balance, report.holders_above_min
        );
        info!("{}", "=".repeat(80));
        Ok(())
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        error!("Execution failed: {:#}", error);
    }
}
