//! Dividend income aggregation.

use std::collections::BTreeMap;

use super::asset::{TransactionRecord, TransactionType};
use super::error::NesteggError;

/// Total dividend income over a transaction export.
///
/// `by_asset` is an extension point and stays empty: the transaction model
/// carries no link from a dividend back to the holding that paid it. It is
/// populated once upstream gains that linkage, not synthesized here.
#[derive(Debug, Clone, PartialEq)]
pub struct DividendSummary {
    pub total_dividends: f64,
    pub dividend_count: usize,
    pub by_asset: BTreeMap<String, f64>,
}

/// Filters the export down to `DIVIDEND` entries and totals them.
pub fn summarize_dividends(
    transactions: &[TransactionRecord],
) -> Result<DividendSummary, NesteggError> {
    for tx in transactions {
        NesteggError::ensure_finite(tx.amount, "transaction amount")?;
    }

    let mut total = 0.0;
    let mut count = 0;
    for tx in transactions {
        if tx.tx_type == TransactionType::Dividend {
            total += tx.amount;
            count += 1;
        }
    }

    Ok(DividendSummary {
        total_dividends: total,
        dividend_count: count,
        by_asset: BTreeMap::new(),
    })
}
