//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::ini_config_adapter::{build_analytics_config, IniConfigAdapter};
use crate::adapters::text_report_adapter::{self, TextReportAdapter};
use crate::domain::error::NesteggError;
use crate::domain::report::{self, AnalyticsConfig};
use crate::domain::returns;
use crate::domain::risk::RiskMetrics;
use crate::domain::sector::{self, SectorRules};
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "nestegg", about = "Investment analytics for a personal-finance tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Full analytics report from a directory of tracker exports
    Report {
        /// Directory holding cash_flows.csv, assets.csv, transactions.csv, returns.csv
        #[arg(short, long)]
        data: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Money-weighted return of the cash-flow series
    Xirr {
        #[arg(short, long)]
        data: PathBuf,
    },
    /// Sector allocation and diversification score
    Sectors {
        #[arg(short, long)]
        data: PathBuf,
    },
    /// Volatility, Sharpe ratio and maximum drawdown
    Risk {
        #[arg(short, long)]
        data: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Compound annual growth rate between two values
    Cagr {
        #[arg(long)]
        beginning: f64,
        #[arg(long)]
        ending: f64,
        #[arg(long)]
        years: f64,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Report { data, config, output } => {
            run_report(&data, config.as_ref(), output.as_ref())
        }
        Command::Xirr { data } => run_xirr(&data),
        Command::Sectors { data } => run_sectors(&data),
        Command::Risk { data, config } => run_risk(&data, config.as_ref()),
        Command::Cagr {
            beginning,
            ending,
            years,
        } => run_cagr(beginning, ending, years),
    }
}

fn load_analytics_config(path: Option<&PathBuf>) -> Result<AnalyticsConfig, ExitCode> {
    match path {
        Some(path) => {
            let adapter = IniConfigAdapter::from_file(path).map_err(|e| {
                let err = NesteggError::ConfigParse {
                    file: path.display().to_string(),
                    reason: e.to_string(),
                };
                eprintln!("error: {err}");
                ExitCode::from(&err)
            })?;
            Ok(build_analytics_config(&adapter))
        }
        None => Ok(AnalyticsConfig::default()),
    }
}

fn run_report(
    data_dir: &PathBuf,
    config_path: Option<&PathBuf>,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    let config = match load_analytics_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    eprintln!("Loading tracker exports from {}", data_dir.display());
    let data_port = CsvAdapter::new(data_dir.clone());

    let report = match build_full_report(&data_port, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match output_path {
        Some(path) => match TextReportAdapter.write(&report, path) {
            Ok(()) => {
                eprintln!("Report written to: {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                (&e).into()
            }
        },
        None => {
            print!("{}", text_report_adapter::render(&report));
            ExitCode::SUCCESS
        }
    }
}

/// Fetches every input through the data port and runs the full analysis.
pub fn build_full_report(
    data_port: &dyn DataPort,
    config: &AnalyticsConfig,
) -> Result<report::AnalyticsReport, NesteggError> {
    let flows = data_port.fetch_cash_flows()?;
    let assets = data_port.fetch_assets()?;
    let transactions = data_port.fetch_transactions()?;
    let monthly_returns = data_port.fetch_monthly_returns()?;

    report::build_report(
        &flows,
        &assets,
        &transactions,
        &monthly_returns,
        config,
        &SectorRules::default(),
    )
}

fn run_xirr(data_dir: &PathBuf) -> ExitCode {
    let data_port = CsvAdapter::new(data_dir.clone());
    let flows = match data_port.fetch_cash_flows() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match returns::money_weighted_return(&flows) {
        Ok(result) => {
            println!("{:.4}", result.rate_pct);
            if !result.converged {
                eprintln!(
                    "warning: solver did not converge after {} iterations; value is best-effort",
                    result.iterations
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_sectors(data_dir: &PathBuf) -> ExitCode {
    let data_port = CsvAdapter::new(data_dir.clone());
    let assets = match data_port.fetch_assets() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match sector::analyze_sectors(&assets, &SectorRules::default()) {
        Ok(analysis) => {
            for (sector, pct) in &analysis.sector_percentages {
                println!("{sector},{pct:.2}");
            }
            println!("diversification,{:.2}", analysis.diversification_score);
            for warning in &analysis.warnings {
                eprintln!("warning: {warning}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_risk(data_dir: &PathBuf, config_path: Option<&PathBuf>) -> ExitCode {
    let config = match load_analytics_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let data_port = CsvAdapter::new(data_dir.clone());
    let assets = match data_port.fetch_assets() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let monthly_returns = match data_port.fetch_monthly_returns() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match RiskMetrics::compute(&assets, &monthly_returns, config.risk_free_rate) {
        Ok(metrics) => {
            println!("portfolio_return,{:.4}", metrics.portfolio_return);
            println!("volatility,{:.4}", metrics.volatility);
            println!("sharpe_ratio,{:.4}", metrics.sharpe_ratio);
            println!("max_drawdown,{:.4}", metrics.max_drawdown);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_cagr(beginning: f64, ending: f64, years: f64) -> ExitCode {
    match returns::cagr(beginning, ending, years) {
        Ok(rate) => {
            println!("{rate:.4}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
