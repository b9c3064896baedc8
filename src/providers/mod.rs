//! Data sources for token holder lists

pub mod etherscan_provider;

// Re-export for convenience
pub use etherscan_provider::{parse_holder_response, EtherscanHolderSource, DEFAULT_BASE_URL};
