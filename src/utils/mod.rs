//! Address and fixed-point helpers

pub mod helper;

pub use helper::{format_address, format_units, is_address, parse_quantity, validate_address};
