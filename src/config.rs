//! Command-line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::models::holder::{BlockRange, DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::providers::etherscan_provider::DEFAULT_BASE_URL;

/// Holders at or above this balance are counted as major holders
pub const DEFAULT_MIN_BALANCE: f64 = 100.0;

/// Number of holders printed from the head of the list
pub const DEFAULT_TOP: usize = 5;

#[derive(Parser, Debug, Clone)]
#[command(name = "token-holders", version, about = "Fetch and filter ERC-20 token holders")]
pub struct Config {
    /// Token contract address (20-byte hex, optional 0x prefix)
    #[arg(env = "TOKEN_ADDRESS")]
    pub token_address: String,

    /// Explorer API key
    #[arg(long, env = "ETHERSCAN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Etherscan-compatible API endpoint
    #[arg(long, env = "ETHERSCAN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value_t = BlockRange::DEFAULT_START)]
    pub start_block: u64,

    #[arg(long, default_value_t = BlockRange::DEFAULT_END)]
    pub end_block: u64,

    /// Token decimals used to scale raw quantities
    #[arg(
        long,
        default_value_t = DEFAULT_DECIMALS,
        value_parser = clap::value_parser!(u32).range(..=MAX_DECIMALS as i64)
    )]
    pub decimals: u32,

    /// Threshold for the major holder count
    #[arg(long, default_value_t = DEFAULT_MIN_BALANCE, value_parser = parse_min_balance)]
    pub min_balance: f64,

    /// How many holders to print
    #[arg(long, default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Also write the report as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// HTTP request timeout in seconds (none by default)
    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn block_range(&self) -> BlockRange {
        BlockRange::new(self.start_block, self.end_block)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn parse_min_balance(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} is not a finite non-negative number", s));
    }
    Ok(value)
}
