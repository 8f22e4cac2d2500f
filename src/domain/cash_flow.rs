//! Dated cash flows feeding the money-weighted return calculation.

use chrono::NaiveDate;

/// Days per year used for all year-fraction arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// One dated cash flow. Outflows (money invested) are negative, inflows
/// (redemptions, withdrawals) are positive.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlow {
    pub date: NaiveDate,
    pub amount: f64,
}

impl CashFlow {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        CashFlow { date, amount }
    }
}

/// Returns a copy of `flows` sorted by date ascending. Input order carries
/// no meaning for cash-flow series, so every consumer sorts first.
pub fn sorted_by_date(flows: &[CashFlow]) -> Vec<CashFlow> {
    let mut sorted = flows.to_vec();
    sorted.sort_by_key(|f| f.date);
    sorted
}

/// Time from `origin` to `date` in 365.25-day years.
pub fn years_since(origin: NaiveDate, date: NaiveDate) -> f64 {
    (date - origin).num_days() as f64 / DAYS_PER_YEAR
}
