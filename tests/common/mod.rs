#![allow(dead_code)]

use chrono::NaiveDate;
use nestegg::domain::asset::{AssetSnapshot, AssetType, TransactionRecord, TransactionType};
use nestegg::domain::cash_flow::CashFlow;
use nestegg::domain::error::NesteggError;
use nestegg::ports::data_port::DataPort;

pub struct MockDataPort {
    pub flows: Vec<CashFlow>,
    pub assets: Vec<AssetSnapshot>,
    pub transactions: Vec<TransactionRecord>,
    pub monthly_returns: Vec<f64>,
    pub error: Option<String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            flows: Vec::new(),
            assets: Vec::new(),
            transactions: Vec::new(),
            monthly_returns: Vec::new(),
            error: None,
        }
    }

    pub fn with_flows(mut self, flows: Vec<CashFlow>) -> Self {
        self.flows = flows;
        self
    }

    pub fn with_assets(mut self, assets: Vec<AssetSnapshot>) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<TransactionRecord>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_monthly_returns(mut self, monthly_returns: Vec<f64>) -> Self {
        self.monthly_returns = monthly_returns;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }

    fn fail_if_configured(&self) -> Result<(), NesteggError> {
        match &self.error {
            Some(reason) => Err(NesteggError::DataLoad {
                file: "mock".to_string(),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl DataPort for MockDataPort {
    fn fetch_cash_flows(&self) -> Result<Vec<CashFlow>, NesteggError> {
        self.fail_if_configured()?;
        Ok(self.flows.clone())
    }

    fn fetch_assets(&self) -> Result<Vec<AssetSnapshot>, NesteggError> {
        self.fail_if_configured()?;
        Ok(self.assets.clone())
    }

    fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>, NesteggError> {
        self.fail_if_configured()?;
        Ok(self.transactions.clone())
    }

    fn fetch_monthly_returns(&self) -> Result<Vec<f64>, NesteggError> {
        self.fail_if_configured()?;
        Ok(self.monthly_returns.clone())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_flow(date_str: &str, amount: f64) -> CashFlow {
    CashFlow {
        date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
        amount,
    }
}

pub fn make_asset(name: &str, asset_type: AssetType, current: f64, invested: f64) -> AssetSnapshot {
    AssetSnapshot {
        name: name.to_string(),
        asset_type,
        current_value: current,
        invested_amount: invested,
    }
}

pub fn make_tx(tx_type: TransactionType, amount: f64) -> TransactionRecord {
    TransactionRecord { tx_type, amount }
}
