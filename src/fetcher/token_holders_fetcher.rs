use std::sync::Arc;

use tracing::{error, info};

use crate::error::HoldersError;
use crate::models::{
    holder::{BlockRange, NormalizedHolder},
    report::HoldersReport,
};
use crate::pipeline::HoldersPipeline;
use crate::traits::data_provider::HolderDataSource;
use crate::utils::helper::validate_address;

/// Fetches a token's holders and runs them through the balance pipeline
pub struct TokenHoldersFetcher {
    data_source: Arc<dyn HolderDataSource>,
    pipeline: HoldersPipeline,
}

impl TokenHoldersFetcher {
    /// Create a new fetcher for tokens with the given number of decimals
    pub fn new(data_source: Arc<dyn HolderDataSource>, decimals: u32) -> Self {
        Self {
            data_source,
            pipeline: HoldersPipeline::new(decimals),
        }
    }

    /// Decimals applied during normalization
    pub fn decimals(&self) -> u32 {
        self.pipeline.decimals()
    }

    /// Fetch and normalize the holder list for a token.
    ///
    /// The address is validated before the data source is called.
    pub async fn get_token_holders(
        &self,
        token_address: &str,
        range: BlockRange,
    ) -> Result<Vec<NormalizedHolder>, HoldersError> {
        let token_address = validate_address(token_address)?;
        self.fetch_normalized(&token_address, range).await
    }

    /// Fetch and normalize for an already validated address
    async fn fetch_normalized(
        &self,
        token_address: &str,
        range: BlockRange,
    ) -> Result<Vec<NormalizedHolder>, HoldersError> {
        let records = self
            .data_source
            .fetch_holder_list(token_address, range)
            .await
            .inspect_err(|e| error!("Error fetching token holders: {}", e))?;

        let holders = self.pipeline.normalize(&records)?;
        info!(
            "Normalized {} holders of {} from {} ({} decimals)",
            holders.len(),
            token_address,
            self.data_source.name(),
            self.decimals()
        );
        Ok(holders)
    }

    /// Keep holders at or above `min_balance`
    pub fn filter_holders_by_min_balance(
        &self,
        holders: &[NormalizedHolder],
        min_balance: f64,
    ) -> Vec<NormalizedHolder> {
        self.pipeline.filter_by_min_balance(holders, min_balance)
    }

    /// Summarize normalized holders: first `top` entries and the count at or above `min_balance`
    pub fn build_report(
        &self,
        token_address: &str,
        range: BlockRange,
        holders: &[NormalizedHolder],
        top: usize,
        min_balance: f64,
    ) -> HoldersReport {
        let above_min = self.filter_holders_by_min_balance(holders, min_balance);

        HoldersReport::new(
            token_address.to_string(),
            range,
            self.decimals(),
            holders.len(),
            holders.iter().take(top).cloned().collect(),
            min_balance,
            above_min.len(),
        )
    }

    /// Fetch, normalize and summarize in one call
    pub async fn fetch_report(
        &self,
        token_address: &str,
        range: BlockRange,
        top: usize,
        min_balance: f64,
    ) -> Result<HoldersReport, HoldersError> {
        let token_address = validate_address(token_address)?;
        let holders = self.fetch_normalized(&token_address, range).await?;
        Ok(self.build_report(&token_address, range, &holders, top, min_balance))
    }
}
