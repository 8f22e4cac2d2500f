//! Data access port trait.
//!
//! The surrounding tracker owns persistence; the engine only ever sees
//! snapshots pulled through this seam.

use crate::domain::asset::{AssetSnapshot, TransactionRecord};
use crate::domain::cash_flow::CashFlow;
use crate::domain::error::NesteggError;

pub trait DataPort {
    fn fetch_cash_flows(&self) -> Result<Vec<CashFlow>, NesteggError>;

    fn fetch_assets(&self) -> Result<Vec<AssetSnapshot>, NesteggError>;

    fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>, NesteggError>;

    /// Periodic (monthly) percentage returns in chronological order.
    fn fetch_monthly_returns(&self) -> Result<Vec<f64>, NesteggError>;
}
