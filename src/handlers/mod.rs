//! Report handlers for holder summaries

pub mod console;
pub mod json;
pub mod composite;

// Re-export for convenience
pub use console::ConsoleReportHandler;
pub use json::JsonReportHandler;
pub use composite::CompositeReportHandler;
