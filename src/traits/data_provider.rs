use async_trait::async_trait;

use crate::error::HoldersError;
use crate::models::holder::{BlockRange, HolderRecord};

/// Core trait for fetching a token's holder list
#[async_trait]
pub trait HolderDataSource: Send + Sync {
    /// Fetch raw holder records for a token within a block range.
    ///
    /// Implementations must reject a malformed token address with
    /// [`HoldersError::InvalidAddress`] before issuing any request, and report
    /// upstream failures as [`HoldersError::Source`].
    async fn fetch_holder_list(
        &self,
        token_address: &str,
        range: BlockRange,
    ) -> Result<Vec<HolderRecord>, HoldersError>;

    /// Short name used in logs
    fn name(&self) -> &str {
        "holder-source"
    }
}
