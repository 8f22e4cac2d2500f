//! CSV file data adapter.
//!
//! Reads the four export files the tracker produces into engine inputs:
//! `cash_flows.csv` (date,amount), `assets.csv`
//! (name,type,current_value,invested_amount), `transactions.csv`
//! (type,amount) and `returns.csv` (month,return_pct). Dates are
//! `YYYY-MM-DD`; the returns file is sorted by month on load so drawdown
//! sees chronological order.

use crate::domain::asset::{AssetSnapshot, AssetType, TransactionRecord, TransactionType};
use crate::domain::cash_flow::CashFlow;
use crate::domain::error::NesteggError;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub const CASH_FLOWS_FILE: &str = "cash_flows.csv";
pub const ASSETS_FILE: &str = "assets.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";
pub const RETURNS_FILE: &str = "returns.csv";

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn read_file(&self, file: &str) -> Result<String, NesteggError> {
        let path = self.base_path.join(file);
        fs::read_to_string(&path).map_err(|e| NesteggError::DataLoad {
            file: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn field<'r>(
        record: &'r csv::StringRecord,
        index: usize,
        name: &str,
        file: &str,
    ) -> Result<&'r str, NesteggError> {
        record.get(index).ok_or_else(|| NesteggError::DataLoad {
            file: file.to_string(),
            reason: format!("missing {name} column"),
        })
    }

    fn parse_amount(raw: &str, name: &str, file: &str) -> Result<f64, NesteggError> {
        let value: f64 = raw.trim().parse().map_err(|e| NesteggError::DataLoad {
            file: file.to_string(),
            reason: format!("invalid {name} value {raw:?}: {e}"),
        })?;
        if !value.is_finite() {
            return Err(NesteggError::DataLoad {
                file: file.to_string(),
                reason: format!("non-finite {name} value {raw:?}"),
            });
        }
        Ok(value)
    }

    fn parse_date(raw: &str, name: &str, file: &str) -> Result<NaiveDate, NesteggError> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| NesteggError::DataLoad {
            file: file.to_string(),
            reason: format!("invalid {name} {raw:?}: {e} (expected YYYY-MM-DD)"),
        })
    }
}

impl DataPort for CsvAdapter {
    fn fetch_cash_flows(&self) -> Result<Vec<CashFlow>, NesteggError> {
        let content = self.read_file(CASH_FLOWS_FILE)?;
        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut flows = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| NesteggError::DataLoad {
                file: CASH_FLOWS_FILE.to_string(),
                reason: format!("CSV parse error: {e}"),
            })?;

            let date_str = Self::field(&record, 0, "date", CASH_FLOWS_FILE)?;
            let date = Self::parse_date(date_str, "date", CASH_FLOWS_FILE)?;
            let amount_str = Self::field(&record, 1, "amount", CASH_FLOWS_FILE)?;
            let amount = Self::parse_amount(amount_str, "amount", CASH_FLOWS_FILE)?;

            flows.push(CashFlow { date, amount });
        }

        Ok(flows)
    }

    fn fetch_assets(&self) -> Result<Vec<AssetSnapshot>, NesteggError> {
        let content = self.read_file(ASSETS_FILE)?;
        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut assets = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| NesteggError::DataLoad {
                file: ASSETS_FILE.to_string(),
                reason: format!("CSV parse error: {e}"),
            })?;

            let name = Self::field(&record, 0, "name", ASSETS_FILE)?.trim().to_string();
            let type_tag = Self::field(&record, 1, "type", ASSETS_FILE)?;
            let current_str = Self::field(&record, 2, "current_value", ASSETS_FILE)?;
            let current_value = Self::parse_amount(current_str, "current_value", ASSETS_FILE)?;
            let invested_str = Self::field(&record, 3, "invested_amount", ASSETS_FILE)?;
            let invested_amount = Self::parse_amount(invested_str, "invested_amount", ASSETS_FILE)?;

            assets.push(AssetSnapshot {
                name,
                asset_type: AssetType::from_tag(type_tag),
                current_value,
                invested_amount,
            });
        }

        Ok(assets)
    }

    fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>, NesteggError> {
        let content = self.read_file(TRANSACTIONS_FILE)?;
        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut transactions = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| NesteggError::DataLoad {
                file: TRANSACTIONS_FILE.to_string(),
                reason: format!("CSV parse error: {e}"),
            })?;

            let type_tag = Self::field(&record, 0, "type", TRANSACTIONS_FILE)?;
            let tx_type = TransactionType::from_tag(type_tag).ok_or_else(|| {
                NesteggError::DataLoad {
                    file: TRANSACTIONS_FILE.to_string(),
                    reason: format!("unknown transaction type {type_tag:?}"),
                }
            })?;
            let amount_str = Self::field(&record, 1, "amount", TRANSACTIONS_FILE)?;
            let amount = Self::parse_amount(amount_str, "amount", TRANSACTIONS_FILE)?;

            transactions.push(TransactionRecord { tx_type, amount });
        }

        Ok(transactions)
    }

    fn fetch_monthly_returns(&self) -> Result<Vec<f64>, NesteggError> {
        let content = self.read_file(RETURNS_FILE)?;
        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut rows: Vec<(NaiveDate, f64)> = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| NesteggError::DataLoad {
                file: RETURNS_FILE.to_string(),
                reason: format!("CSV parse error: {e}"),
            })?;

            let month_str = Self::field(&record, 0, "month", RETURNS_FILE)?;
            let month = Self::parse_date(month_str, "month", RETURNS_FILE)?;
            let ret_str = Self::field(&record, 1, "return_pct", RETURNS_FILE)?;
            let ret = Self::parse_amount(ret_str, "return_pct", RETURNS_FILE)?;

            rows.push((month, ret));
        }

        // Drawdown depends on chronological order; the export may not be sorted.
        rows.sort_by_key(|(month, _)| *month);
        Ok(rows.into_iter().map(|(_, ret)| ret).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_data() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();

        fs::write(
            path.join(CASH_FLOWS_FILE),
            "date,amount\n\
             2023-01-01,-100000\n\
             2024-01-01,115000\n",
        )
        .unwrap();
        fs::write(
            path.join(ASSETS_FILE),
            "name,type,current_value,invested_amount\n\
             Infosys,STOCK,60000,50000\n\
             Sovereign Gold Bond,GOLD,40000,35000\n",
        )
        .unwrap();
        fs::write(
            path.join(TRANSACTIONS_FILE),
            "type,amount\n\
             DIVIDEND,1200\n\
             DEBIT,5000\n",
        )
        .unwrap();
        fs::write(
            path.join(RETURNS_FILE),
            "month,return_pct\n\
             2024-02-01,-1.5\n\
             2024-01-01,2.0\n\
             2024-03-01,3.0\n",
        )
        .unwrap();

        (dir, path)
    }

    #[test]
    fn fetch_cash_flows_parses_rows() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let flows = adapter.fetch_cash_flows().unwrap();
        assert_eq!(flows.len(), 2);
        assert_eq!(flows[0].amount, -100_000.0);
        assert_eq!(flows[0].date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[test]
    fn fetch_assets_parses_types() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let assets = adapter.fetch_assets().unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].asset_type, AssetType::Stock);
        assert_eq!(assets[1].asset_type, AssetType::Gold);
        assert_eq!(assets[1].name, "Sovereign Gold Bond");
        assert_eq!(assets[1].invested_amount, 35_000.0);
    }

    #[test]
    fn fetch_transactions_rejects_unknown_tag() {
        let (_dir, path) = setup_test_data();
        fs::write(path.join(TRANSACTIONS_FILE), "type,amount\nTRANSFER,10\n").unwrap();
        let adapter = CsvAdapter::new(path);

        assert!(adapter.fetch_transactions().is_err());
    }

    #[test]
    fn fetch_monthly_returns_sorts_chronologically() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let returns = adapter.fetch_monthly_returns().unwrap();
        assert_eq!(returns, vec![2.0, -1.5, 3.0]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let adapter = CsvAdapter::new(dir.path().to_path_buf());
        assert!(adapter.fetch_cash_flows().is_err());
    }

    #[test]
    fn invalid_amount_is_an_error() {
        let (_dir, path) = setup_test_data();
        fs::write(path.join(CASH_FLOWS_FILE), "date,amount\n2024-01-01,abc\n").unwrap();
        let adapter = CsvAdapter::new(path);
        assert!(adapter.fetch_cash_flows().is_err());
    }

    #[test]
    fn non_finite_amount_is_an_error() {
        let (_dir, path) = setup_test_data();
        fs::write(path.join(CASH_FLOWS_FILE), "date,amount\n2024-01-01,inf\n").unwrap();
        let adapter = CsvAdapter::new(path);
        assert!(adapter.fetch_cash_flows().is_err());
    }

    #[test]
    fn invalid_date_is_an_error() {
        let (_dir, path) = setup_test_data();
        fs::write(path.join(CASH_FLOWS_FILE), "date,amount\n01/02/2024,100\n").unwrap();
        let adapter = CsvAdapter::new(path);
        assert!(adapter.fetch_cash_flows().is_err());
    }
}
