//! Data models for holder lists and reports

pub mod holder;
pub mod report;

// Re-export for convenience
pub use holder::{BlockRange, HolderRecord, NormalizedHolder, DEFAULT_DECIMALS, MAX_DECIMALS};
pub use report::HoldersReport;
