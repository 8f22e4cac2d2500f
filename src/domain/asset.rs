//! Holdings and transactions as supplied by the surrounding tracker.

use std::fmt;

/// Instrument category of a holding. Unrecognized tags fall through to
/// `Other` so new instrument types never break the analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    Stock,
    MutualFund,
    Gold,
    Ppf,
    Epf,
    FixedDeposit,
    Other,
}

impl AssetType {
    /// Parse a type tag (`STOCK`, `MUTUAL_FUND`, ...) case-insensitively.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_uppercase().as_str() {
            "STOCK" => AssetType::Stock,
            "MUTUAL_FUND" => AssetType::MutualFund,
            "GOLD" => AssetType::Gold,
            "PPF" => AssetType::Ppf,
            "EPF" => AssetType::Epf,
            "FIXED_DEPOSIT" => AssetType::FixedDeposit,
            _ => AssetType::Other,
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            AssetType::Stock => "STOCK",
            AssetType::MutualFund => "MUTUAL_FUND",
            AssetType::Gold => "GOLD",
            AssetType::Ppf => "PPF",
            AssetType::Epf => "EPF",
            AssetType::FixedDeposit => "FIXED_DEPOSIT",
            AssetType::Other => "OTHER",
        };
        write!(f, "{tag}")
    }
}

/// One holding's value at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetSnapshot {
    pub name: String,
    pub asset_type: AssetType,
    pub current_value: f64,
    pub invested_amount: f64,
}

/// Transaction tag. Only `Dividend` matters to this engine; the others are
/// accepted so a full transaction export can be fed in unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Dividend,
    Debit,
    Credit,
}

impl TransactionType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_uppercase().as_str() {
            "DIVIDEND" => Some(TransactionType::Dividend),
            "DEBIT" => Some(TransactionType::Debit),
            "CREDIT" => Some(TransactionType::Credit),
            _ => None,
        }
    }
}

/// One ledger entry; amounts are non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub tx_type: TransactionType,
    pub amount: f64,
}

pub fn total_current_value(assets: &[AssetSnapshot]) -> f64 {
    assets.iter().map(|a| a.current_value).sum()
}

pub fn total_invested(assets: &[AssetSnapshot]) -> f64 {
    assets.iter().map(|a| a.invested_amount).sum()
}

/// Overall portfolio gain as a percentage of the invested amount.
/// Zero when nothing is invested.
pub fn portfolio_return_pct(assets: &[AssetSnapshot]) -> f64 {
    let invested = total_invested(assets);
    if invested == 0.0 {
        return 0.0;
    }
    (total_current_value(assets) - invested) / invested * 100.0
}
