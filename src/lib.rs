//! Token Holders Library
//!
//! Fetches an ERC-20 token's holder list from an Etherscan-compatible explorer,
//! converts raw integer quantities into decimal balances and filters holders by
//! a minimum balance.

// Public modules - these are the API surface
pub mod config;
pub mod error;
pub mod models;
pub mod traits;
pub mod providers;
pub mod pipeline;
pub mod handlers;
pub mod fetcher;
pub mod utils;

// Re-export commonly used items for easier access
pub use error::HoldersError;
pub use models::{
    holder::{BlockRange, HolderRecord, NormalizedHolder, DEFAULT_DECIMALS},
    report::HoldersReport,
};
pub use traits::{
    data_provider::HolderDataSource,
    report_handler::ReportHandler,
};
pub use providers::etherscan_provider::EtherscanHolderSource;
pub use pipeline::holders_pipeline::{
    filter_by_min_balance, normalize, try_filter_by_min_balance, HoldersPipeline,
};
pub use handlers::{
    console::ConsoleReportHandler,
    json::JsonReportHandler,
    composite::CompositeReportHandler,
};
pub use fetcher::token_holders_fetcher::TokenHoldersFetcher;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, HoldersError>;
