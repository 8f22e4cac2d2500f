//! Full analytics report: every metric the engine offers, computed from
//! one data snapshot.

use super::asset::{AssetSnapshot, TransactionRecord};
use super::benchmark::{self, BenchmarkComparison};
use super::cash_flow::CashFlow;
use super::dividends::{self, DividendSummary};
use super::error::NesteggError;
use super::returns::{self, MoneyWeightedReturn};
use super::risk::RiskMetrics;
use super::sector::{self, SectorAnalysis, SectorRules};

/// Tunables supplied by configuration; percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    pub risk_free_rate: f64,
    pub benchmark_return: f64,
}

pub const DEFAULT_RISK_FREE_RATE: f64 = 6.0;
pub const DEFAULT_BENCHMARK_RETURN: f64 = 12.0;

impl Default for AnalyticsConfig {
    fn default() -> Self {
        AnalyticsConfig {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            benchmark_return: DEFAULT_BENCHMARK_RETURN,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub money_weighted: MoneyWeightedReturn,
    pub benchmark: BenchmarkComparison,
    pub sectors: SectorAnalysis,
    pub dividends: DividendSummary,
    pub risk: RiskMetrics,
}

/// Runs every analysis over one snapshot of tracker data. Each computation
/// is independent; this just saves the caller five calls.
pub fn build_report(
    flows: &[CashFlow],
    assets: &[AssetSnapshot],
    transactions: &[TransactionRecord],
    monthly_returns_pct: &[f64],
    config: &AnalyticsConfig,
    rules: &SectorRules,
) -> Result<AnalyticsReport, NesteggError> {
    Ok(AnalyticsReport {
        money_weighted: returns::money_weighted_return(flows)?,
        benchmark: benchmark::compare_with_benchmark(assets, config.benchmark_return)?,
        sectors: sector::analyze_sectors(assets, rules)?,
        dividends: dividends::summarize_dividends(transactions)?,
        risk: RiskMetrics::compute(assets, monthly_returns_pct, config.risk_free_rate)?,
    })
}
