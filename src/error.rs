//! Error types for the token holders library

use thiserror::Error;

/// Errors surfaced by the holder source and the balance pipeline
#[derive(Error, Debug)]
pub enum HoldersError {
    /// Token address is not 20 bytes of hex
    #[error("Invalid token address: {0}")]
    InvalidAddress(String),

    /// Upstream explorer reported a failure; carries its message verbatim
    #[error("API Error: {0}")]
    Source(String),

    /// Raw quantity is not a non-negative base-10 integer
    #[error("Malformed quantity {quantity:?} for holder {address}")]
    MalformedQuantity { address: String, quantity: String },

    /// Normalized balance could not be read as a number (strict filtering only)
    #[error("Malformed balance {balance:?} for holder {address}")]
    MalformedBalance { address: String, balance: String },

    /// Decimals above the supported maximum
    #[error("Invalid decimal size: {0}")]
    InvalidDecimals(u32),

    /// Minimum balance is negative, NaN or infinite
    #[error("Invalid minimum balance: {0}")]
    InvalidThreshold(f64),

    /// Explorer API key was not supplied
    #[error("Etherscan API key is required")]
    MissingApiKey,

    /// Response body did not match the expected holder list schema
    #[error("Unexpected response from explorer: {0}")]
    UnexpectedResponse(String),

    /// Transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HoldersError {
    /// Upstream message for `Source` errors
    pub fn source_message(&self) -> Option<&str> {
        match self {
            HoldersError::Source(message) => Some(message),
            _ => None,
        }
    }
}
