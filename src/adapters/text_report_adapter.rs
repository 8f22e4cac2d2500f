//! Plain-text report rendering.

use crate::domain::error::NesteggError;
use crate::domain::report::AnalyticsReport;
use crate::ports::report_port::ReportPort;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub struct TextReportAdapter;

/// Renders the report as aligned plain text, one section per metric bundle.
pub fn render(report: &AnalyticsReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Returns ===");
    let _ = writeln!(
        out,
        "Money-Weighted Return:  {:.2}%{}",
        report.money_weighted.rate_pct,
        if report.money_weighted.converged {
            ""
        } else {
            " (did not converge)"
        }
    );
    let _ = writeln!(
        out,
        "Portfolio Return:       {:.2}%",
        report.benchmark.portfolio_return
    );
    let _ = writeln!(
        out,
        "Benchmark Return:       {:.2}%",
        report.benchmark.benchmark_return
    );
    let _ = writeln!(out, "Alpha:                  {:.2}%", report.benchmark.alpha);
    let _ = writeln!(
        out,
        "Outperformed Benchmark: {}",
        if report.benchmark.outperformed { "yes" } else { "no" }
    );

    let _ = writeln!(out, "\n=== Allocation ===");
    for (sector, pct) in &report.sectors.sector_percentages {
        let _ = writeln!(out, "  {sector:<8} {pct:>6.1}%");
    }
    let _ = writeln!(
        out,
        "Diversification Score:  {:.1}/100",
        report.sectors.diversification_score
    );
    for warning in &report.sectors.warnings {
        let _ = writeln!(out, "  warning: {warning}");
    }

    let _ = writeln!(out, "\n=== Income ===");
    let _ = writeln!(
        out,
        "Dividends:              {:.2} across {} payments",
        report.dividends.total_dividends, report.dividends.dividend_count
    );

    let _ = writeln!(out, "\n=== Risk ===");
    let _ = writeln!(out, "Volatility:             {:.2}%", report.risk.volatility);
    let _ = writeln!(out, "Sharpe Ratio:           {:.2}", report.risk.sharpe_ratio);
    let _ = writeln!(out, "Max Drawdown:           -{:.1}%", report.risk.max_drawdown);

    out
}

impl ReportPort for TextReportAdapter {
    fn write(&self, report: &AnalyticsReport, output_path: &Path) -> Result<(), NesteggError> {
        fs::write(output_path, render(report))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{build_report, AnalyticsConfig};
    use crate::domain::sector::SectorRules;
    use crate::domain::asset::{AssetSnapshot, AssetType};
    use tempfile::TempDir;

    fn sample_report() -> AnalyticsReport {
        let assets = vec![
            AssetSnapshot {
                name: "Stock".to_string(),
                asset_type: AssetType::Stock,
                current_value: 60_000.0,
                invested_amount: 50_000.0,
            },
            AssetSnapshot {
                name: "Gold".to_string(),
                asset_type: AssetType::Gold,
                current_value: 40_000.0,
                invested_amount: 40_000.0,
            },
        ];
        build_report(
            &[],
            &assets,
            &[],
            &[1.0, -2.0, 3.0],
            &AnalyticsConfig::default(),
            &SectorRules::default(),
        )
        .unwrap()
    }

    #[test]
    fn render_includes_every_section() {
        let text = render(&sample_report());
        assert!(text.contains("=== Returns ==="));
        assert!(text.contains("=== Allocation ==="));
        assert!(text.contains("=== Income ==="));
        assert!(text.contains("=== Risk ==="));
        assert!(text.contains("Equity"));
        assert!(text.contains("Gold"));
    }

    #[test]
    fn render_surfaces_concentration_warnings() {
        let text = render(&sample_report());
        assert!(text.contains("warning:"));
        assert!(text.contains("60.0%"));
    }

    #[test]
    fn write_creates_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        TextReportAdapter.write(&sample_report(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Sharpe Ratio"));
    }
}
