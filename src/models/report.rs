use chrono::{DateTime, Utc};
use serde::Serialize;

use super::holder::{BlockRange, NormalizedHolder};

/// Summary of one holder list fetch
#[derive(Debug, Clone, Serialize)]
pub struct HoldersReport {
    pub generated_at: DateTime<Utc>,
    pub token_address: String,
    pub block_range: BlockRange,
    pub decimals: u32,
    pub total_holders: usize,
    pub top_holders: Vec<NormalizedHolder>,
    pub min_balance: f64,
    pub holders_above_min: usize,
}

impl HoldersReport {
    /// Create a new report stamped with the current time
    pub fn new(
        token_address: String,
        block_range: BlockRange,
        decimals: u32,
        total_holders: usize,
        top_holders: Vec<NormalizedHolder>,
        min_balance: f64,
        holders_above_min: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            token_address,
            block_range,
            decimals,
            total_holders,
            top_holders,
            min_balance,
            holders_above_min,
        }
    }

    /// Check if the explorer returned no holders
    pub fn is_empty(&self) -> bool {
        self.total_holders == 0
    }
}
