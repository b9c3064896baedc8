use serde::{Deserialize, Serialize};

/// Default number of fractional digits for ERC-20 tokens
pub const DEFAULT_DECIMALS: u32 = 18;

/// Largest decimals value accepted for normalization
pub const MAX_DECIMALS: u32 = 256;

/// Holder entry as reported by the explorer, before decimal normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderRecord {
    #[serde(rename = "TokenHolderAddress")]
    pub address: String,
    /// Smallest-unit integer balance, base-10
    #[serde(rename = "TokenHolderQuantity")]
    pub raw_quantity: String,
}

impl HolderRecord {
    /// Create a new holder record
    pub fn new(address: impl Into<String>, raw_quantity: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            raw_quantity: raw_quantity.into(),
        }
    }
}

/// Holder with a human-readable decimal balance
///
/// The balance stays a string so large raw quantities keep every digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedHolder {
    pub address: String,
    pub balance: String,
}

impl NormalizedHolder {
    /// Create a new normalized holder
    pub fn new(address: impl Into<String>, balance: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            balance: balance.into(),
        }
    }

    /// Balance as a finite float, if it parses.
    ///
    /// `inf`, `infinity` and `NaN` are not balances and yield `None`.
    pub fn balance_value(&self) -> Option<f64> {
        self.balance
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}

/// Inclusive block window passed through to the explorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRange {
    pub start_block: u64,
    pub end_block: u64,
}

impl BlockRange {
    pub const DEFAULT_START: u64 = 0;
    pub const DEFAULT_END: u64 = 99_999_999;

    pub fn new(start_block: u64, end_block: u64) -> Self {
        Self { start_block, end_block }
    }
}

impl Default for BlockRange {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START, Self::DEFAULT_END)
    }
}
