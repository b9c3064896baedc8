use num_bigint::BigUint;

use crate::error::HoldersError;

/// Length of an account address in bytes
pub const ADDRESS_BYTES: usize = 20;

/// Validate a 20-byte hex address, with or without the `0x` prefix.
///
/// Casing is not checked against an EIP-55 checksum. Returns the address with a
/// lowercase `0x` prefix and the hex digits as given.
pub fn validate_address(address: &str) -> Result<String, HoldersError> {
    let trimmed = address.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.len() != ADDRESS_BYTES * 2 {
        return Err(HoldersError::InvalidAddress(address.to_string()));
    }

    match hex::decode(digits) {
        Ok(bytes) if bytes.len() == ADDRESS_BYTES => Ok(format!("0x{}", digits)),
        _ => Err(HoldersError::InvalidAddress(address.to_string())),
    }
}

/// Check whether a string is a valid address
pub fn is_address(address: &str) -> bool {
    validate_address(address).is_ok()
}

/// Parse a base-10 unsigned integer of any size.
///
/// Only ASCII digits are accepted: no sign, separators or whitespace.
pub fn parse_quantity(quantity: &str) -> Option<BigUint> {
    if quantity.is_empty() || !quantity.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::parse_bytes(quantity.as_bytes(), 10)
}

/// Render `raw / 10^decimals` as a decimal string without rounding.
///
/// Trailing fractional zeros are trimmed but one fractional digit is always kept,
/// so `1500000000000000000` with 18 decimals is `1.5` and `10^20` is `100.0`.
pub fn format_units(raw: &BigUint, decimals: u32) -> String {
    if decimals == 0 {
        return format!("{}.0", raw);
    }

    let divisor = BigUint::from(10u32).pow(decimals);
    let whole = raw / &divisor;
    let fraction = raw % &divisor;

    let padded = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    let trimmed = padded.trim_end_matches('0');
    let fraction = if trimmed.is_empty() { "0" } else { trimmed };

    format!("{}.{}", whole, fraction)
}

/// Format an address for display (truncated)
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
