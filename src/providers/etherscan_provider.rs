use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::HoldersError;
use crate::models::holder::{BlockRange, HolderRecord};
use crate::traits::data_provider::HolderDataSource;
use crate::utils::helper::validate_address;

/// Etherscan mainnet API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.etherscan.io/api";

/// Status value the explorer uses for a successful call
const STATUS_OK: &str = "1";

/// Response envelope shared by every Etherscan-style endpoint
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    status: String,
    message: String,
    #[serde(default)]
    result: Value,
}

/// Holder source backed by an Etherscan-compatible HTTP API
pub struct EtherscanHolderSource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl EtherscanHolderSource {
    /// Create a source against the Etherscan mainnet endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self, HoldersError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, None)
    }

    /// Create a source against any Etherscan-compatible endpoint
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, HoldersError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(HoldersError::MissingApiKey);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key,
            base_url: base_url.into(),
        })
    }

    /// Endpoint this source queries
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn query_params(&self, token_address: &str, range: BlockRange) -> Vec<(&'static str, String)> {
        vec![
            ("module", "token".to_string()),
            ("action", "tokenholderlist".to_string()),
            ("contractaddress", token_address.to_string()),
            ("startblock", range.start_block.to_string()),
            ("endblock", range.end_block.to_string()),
            ("sort", "asc".to_string()),
            ("apikey", self.api_key.clone()),
        ]
    }
}

/// Decode a `tokenholderlist` response body.
///
/// A non-`"1"` status becomes [`HoldersError::Source`] carrying the explorer's
/// `message` unchanged. A `result` that is not a list of holder objects is
/// [`HoldersError::UnexpectedResponse`].
pub fn parse_holder_response(body: &str) -> Result<Vec<HolderRecord>, HoldersError> {
    let envelope: ApiEnvelope = serde_json::from_str(body)
        .map_err(|e| HoldersError::UnexpectedResponse(format!("invalid envelope: {}", e)))?;

    if envelope.status != STATUS_OK {
        if let Value::String(detail) = &envelope.result {
            warn!("Explorer returned status {}: {}", envelope.status, detail);
        }
        return Err(HoldersError::Source(envelope.message));
    }

    serde_json::from_value(envelope.result)
        .map_err(|e| HoldersError::UnexpectedResponse(format!("invalid holder list: {}", e)))
}

#[async_trait]
impl HolderDataSource for EtherscanHolderSource {
    async fn fetch_holder_list(
        &self,
        token_address: &str,
        range: BlockRange,
    ) -> Result<Vec<HolderRecord>, HoldersError> {
        let token_address = validate_address(token_address)?;

        debug!(
            "Requesting holder list for {} (blocks {}..={}) from {}",
            token_address, range.start_block, range.end_block, self.base_url
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query_params(&token_address, range))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Explorer HTTP error: Status {}", status);
            return Err(HoldersError::Source(format!("HTTP {}", status)));
        }

        let body = response.text().await?;
        let records = parse_holder_response(&body)?;

        info!("Explorer returned {} holders for {}", records.len(), token_address);
        Ok(records)
    }

    fn name(&self) -> &str {
        "etherscan"
    }
}
