//! Core traits for the holder fetcher

pub mod data_provider;
pub mod report_handler;

// Re-export for convenience
pub use data_provider::HolderDataSource;
pub use report_handler::ReportHandler;
