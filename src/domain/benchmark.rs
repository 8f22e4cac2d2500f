//! Portfolio return versus a benchmark index.

use super::asset::{self, AssetSnapshot};
use super::error::NesteggError;

/// Result of comparing the portfolio's simple return against a benchmark.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkComparison {
    pub portfolio_return: f64,
    pub benchmark_return: f64,
    pub alpha: f64,
    pub outperformed: bool,
}

/// Simple (non-annualized) portfolio return versus `benchmark_return`,
/// both in percent. Alpha is the excess over the benchmark.
pub fn compare_with_benchmark(
    assets: &[AssetSnapshot],
    benchmark_return: f64,
) -> Result<BenchmarkComparison, NesteggError> {
    NesteggError::ensure_finite(benchmark_return, "benchmark return")?;
    for a in assets {
        NesteggError::ensure_finite(a.current_value, "current value")?;
        NesteggError::ensure_finite(a.invested_amount, "invested amount")?;
    }

    let portfolio_return = asset::portfolio_return_pct(assets);
    let alpha = portfolio_return - benchmark_return;

    Ok(BenchmarkComparison {
        portfolio_return,
        benchmark_return,
        alpha,
        outperformed: alpha > 0.0,
    })
}
