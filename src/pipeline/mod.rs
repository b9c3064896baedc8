//! Balance normalization and threshold filtering

pub mod holders_pipeline;

pub use holders_pipeline::{
    filter_by_min_balance, normalize, try_filter_by_min_balance, HoldersPipeline,
};
