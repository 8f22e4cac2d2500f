//! Time-series risk statistics: volatility, Sharpe-style ratio, maximum
//! drawdown, and the combined bundle.

use super::asset::{self, AssetSnapshot};
use super::error::NesteggError;

/// Annualization factor for monthly sampling: sqrt(12). The monthly
/// frequency is a fixed modeling assumption, not derived from the data.
const MONTHS_PER_YEAR: f64 = 12.0;

/// Population standard deviation of monthly percentage returns, annualized
/// by sqrt(12). Zero for fewer than two data points.
pub fn annualized_volatility(monthly_returns_pct: &[f64]) -> Result<f64, NesteggError> {
    NesteggError::ensure_all_finite(monthly_returns_pct, "periodic return")?;

    if monthly_returns_pct.len() < 2 {
        return Ok(0.0);
    }

    let n = monthly_returns_pct.len() as f64;
    let mean = monthly_returns_pct.iter().sum::<f64>() / n;
    let variance = monthly_returns_pct
        .iter()
        .map(|r| {
            let diff = r - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    Ok(variance.sqrt() * MONTHS_PER_YEAR.sqrt())
}

/// Excess return per unit of volatility. Zero when volatility is zero —
/// the ratio is undefined for a flat series and that is accepted here.
pub fn sharpe_ratio(
    portfolio_return: f64,
    risk_free_rate: f64,
    volatility: f64,
) -> Result<f64, NesteggError> {
    NesteggError::ensure_finite(portfolio_return, "portfolio return")?;
    NesteggError::ensure_finite(risk_free_rate, "risk-free rate")?;
    NesteggError::ensure_finite(volatility, "volatility")?;

    if volatility == 0.0 {
        return Ok(0.0);
    }
    Ok((portfolio_return - risk_free_rate) / volatility)
}

/// Largest peak-to-trough decline, in percent, of a cumulative index that
/// starts at 100 and compounds each period's return. The input sequence is
/// chronological; this is the one routine where order carries meaning and
/// is never re-sorted.
pub fn max_drawdown(returns_pct: &[f64]) -> Result<f64, NesteggError> {
    NesteggError::ensure_all_finite(returns_pct, "periodic return")?;

    let mut current = 100.0;
    let mut peak = 100.0;
    let mut max_dd = 0.0_f64;

    for &ret in returns_pct {
        current *= 1.0 + ret / 100.0;
        if current > peak {
            peak = current;
        } else if peak > 0.0 {
            let dd = (peak - current) / peak * 100.0;
            if dd > max_dd {
                max_dd = dd;
            }
        }
    }

    Ok(max_dd)
}

/// Risk metrics for one portfolio and its periodic return history.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskMetrics {
    pub portfolio_return: f64,
    pub volatility: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
}

impl RiskMetrics {
    /// Convenience aggregation of the individual routines; no new logic.
    pub fn compute(
        assets: &[AssetSnapshot],
        monthly_returns_pct: &[f64],
        risk_free_rate: f64,
    ) -> Result<Self, NesteggError> {
        for a in assets {
            NesteggError::ensure_finite(a.current_value, "current value")?;
            NesteggError::ensure_finite(a.invested_amount, "invested amount")?;
        }

        let portfolio_return = asset::portfolio_return_pct(assets);
        let volatility = annualized_volatility(monthly_returns_pct)?;
        let sharpe = sharpe_ratio(portfolio_return, risk_free_rate, volatility)?;
        let drawdown = max_drawdown(monthly_returns_pct)?;

        Ok(RiskMetrics {
            portfolio_return,
            volatility,
            sharpe_ratio: sharpe,
            max_drawdown: drawdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::AssetType;

    #[test]
    fn volatility_of_constant_series_is_zero() {
        let vol = annualized_volatility(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        assert!(vol.abs() < 1e-12);
    }

    #[test]
    fn volatility_known_series() {
        // Population stddev of [1, -1, 1, -1] is 1; annualized by sqrt(12).
        let vol = annualized_volatility(&[1.0, -1.0, 1.0, -1.0]).unwrap();
        assert!((vol - MONTHS_PER_YEAR.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn volatility_short_series_is_zero() {
        assert_eq!(annualized_volatility(&[]).unwrap(), 0.0);
        assert_eq!(annualized_volatility(&[3.0]).unwrap(), 0.0);
    }

    #[test]
    fn sharpe_zero_volatility_is_zero() {
        for (ret, rf) in [(15.0, 6.0), (0.0, 0.0), (-10.0, 8.0)] {
            assert_eq!(sharpe_ratio(ret, rf, 0.0).unwrap(), 0.0);
        }
    }

    #[test]
    fn sharpe_basic() {
        let s = sharpe_ratio(15.0, 6.0, 9.0).unwrap();
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn drawdown_non_negative_series_is_zero() {
        let dd = max_drawdown(&[0.0, 2.0, 0.5, 3.0, 0.0]).unwrap();
        assert_eq!(dd, 0.0);
    }

    #[test]
    fn drawdown_two_period_example() {
        // 100 -> 100 -> 90, so 10% off the peak.
        let dd = max_drawdown(&[0.0, -10.0]).unwrap();
        assert!((dd - 10.0).abs() < 1e-9);
    }

    #[test]
    fn drawdown_recovers_and_keeps_worst() {
        // Index: 100, 110, 88, 105.6; worst fall is 22/110 = 20%.
        let dd = max_drawdown(&[10.0, -20.0, 20.0]).unwrap();
        assert!((dd - 20.0).abs() < 1e-9);
    }

    #[test]
    fn drawdown_is_order_sensitive() {
        let a = max_drawdown(&[10.0, -10.0]).unwrap();
        let b = max_drawdown(&[-10.0, 10.0]).unwrap();
        assert!(a != b);
    }

    #[test]
    fn drawdown_empty_series() {
        assert_eq!(max_drawdown(&[]).unwrap(), 0.0);
    }

    #[test]
    fn bundle_combines_routines() {
        let assets = vec![AssetSnapshot {
            name: "Fund".to_string(),
            asset_type: AssetType::MutualFund,
            current_value: 115_000.0,
            invested_amount: 100_000.0,
        }];
        let returns = [2.0, -1.0, 3.0, -2.0];
        let metrics = RiskMetrics::compute(&assets, &returns, 6.0).unwrap();

        assert!((metrics.portfolio_return - 15.0).abs() < 1e-9);
        assert_eq!(metrics.volatility, annualized_volatility(&returns).unwrap());
        assert_eq!(metrics.max_drawdown, max_drawdown(&returns).unwrap());
        assert_eq!(
            metrics.sharpe_ratio,
            sharpe_ratio(metrics.portfolio_return, 6.0, metrics.volatility).unwrap()
        );
    }

    #[test]
    fn rejects_non_finite_return() {
        assert!(annualized_volatility(&[1.0, f64::INFINITY]).is_err());
        assert!(max_drawdown(&[f64::NAN]).is_err());
    }
}
