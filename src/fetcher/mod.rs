//! Orchestration of source fetch and balance pipeline

pub mod token_holders_fetcher;

pub use token_holders_fetcher::TokenHoldersFetcher;
