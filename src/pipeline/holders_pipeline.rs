use tracing::debug;

use crate::error::HoldersError;
use crate::models::holder::{HolderRecord, NormalizedHolder, MAX_DECIMALS};
use crate::utils::helper::{format_units, parse_quantity};

/// Convert raw holder quantities into decimal balances.
///
/// Every record yields exactly one holder, in input order. The first quantity that is
/// not a non-negative base-10 integer aborts the whole call. `decimals` above
/// [`MAX_DECIMALS`] is rejected up front.
pub fn normalize(
    records: &[HolderRecord],
    decimals: u32,
) -> Result<Vec<NormalizedHolder>, HoldersError> {
    if decimals > MAX_DECIMALS {
        return Err(HoldersError::InvalidDecimals(decimals));
    }

    records
        .iter()
        .map(|record| {
            let raw = parse_quantity(&record.raw_quantity).ok_or_else(|| {
                HoldersError::MalformedQuantity {
                    address: record.address.clone(),
                    quantity: record.raw_quantity.clone(),
                }
            })?;
            Ok(NormalizedHolder {
                address: record.address.clone(),
                balance: format_units(&raw, decimals),
            })
        })
        .collect()
}

/// Keep holders whose balance is at least `min_balance`, preserving order.
///
/// Balances that do not parse as numbers fail the filter rather than raising an
/// error. Use [`try_filter_by_min_balance`] to reject them instead.
pub fn filter_by_min_balance(
    holders: &[NormalizedHolder],
    min_balance: f64,
) -> Vec<NormalizedHolder> {
    holders
        .iter()
        .filter(|holder| match holder.balance_value() {
            Some(value) => value >= min_balance,
            None => {
                debug!(
                    "Excluding holder {} with unparseable balance {:?}",
                    holder.address, holder.balance
                );
                false
            }
        })
        .cloned()
        .collect()
}

/// Strict variant of [`filter_by_min_balance`].
///
/// Fails on a negative or non-finite threshold and on the first balance that is not
/// a number.
pub fn try_filter_by_min_balance(
    holders: &[NormalizedHolder],
    min_balance: f64,
) -> Result<Vec<NormalizedHolder>, HoldersError> {
    if !min_balance.is_finite() || min_balance < 0.0 {
        return Err(HoldersError::InvalidThreshold(min_balance));
    }

    let mut kept = Vec::new();
    for holder in holders {
        let value = holder
            .balance_value()
            .ok_or_else(|| HoldersError::MalformedBalance {
                address: holder.address.clone(),
                balance: holder.balance.clone(),
            })?;
        if value >= min_balance {
            kept.push(holder.clone());
        }
    }
    Ok(kept)
}

/// Stateless normalize-then-filter pipeline bound to one token's decimals
#[derive(Debug, Clone, Copy)]
pub struct HoldersPipeline {
    decimals: u32,
}

impl HoldersPipeline {
    pub fn new(decimals: u32) -> Self {
        Self { decimals }
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn normalize(&self, records: &[HolderRecord]) -> Result<Vec<NormalizedHolder>, HoldersError> {
        normalize(records, self.decimals)
    }

    pub fn filter_by_min_balance(
        &self,
        holders: &[NormalizedHolder],
        min_balance: f64,
    ) -> Vec<NormalizedHolder> {
        filter_by_min_balance(holders, min_balance)
    }
}

impl Default for HoldersPipeline {
    fn default() -> Self {
        Self::new(crate::models::holder::DEFAULT_DECIMALS)
    }
}
