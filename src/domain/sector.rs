//! Sector classification, allocation percentages, and the entropy-based
//! diversification score.

use std::collections::BTreeMap;
use std::fmt;

use super::asset::{AssetSnapshot, AssetType};
use super::error::NesteggError;

/// A sector allocation above this share of total value draws a
/// concentration warning.
pub const CONCENTRATION_THRESHOLD_PCT: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sector {
    Equity,
    Debt,
    Gold,
    Liquid,
    Other,
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sector::Equity => "Equity",
            Sector::Debt => "Debt",
            Sector::Gold => "Gold",
            Sector::Liquid => "Liquid",
            Sector::Other => "Other",
        };
        write!(f, "{name}")
    }
}

/// One keyword bucket for classifying mutual funds by name.
#[derive(Debug, Clone, PartialEq)]
pub struct FundBucket {
    pub keywords: Vec<String>,
    pub sector: Sector,
}

/// Classification rule table. Plain data rather than a static lookup so
/// the same logic can run against synthetic rule sets in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorRules {
    /// Checked in order against the lowercased fund name; first hit wins.
    pub fund_buckets: Vec<FundBucket>,
}

impl Default for SectorRules {
    fn default() -> Self {
        let bucket = |keywords: &[&str], sector| FundBucket {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            sector,
        };
        SectorRules {
            fund_buckets: vec![
                bucket(&["debt", "bond"], Sector::Debt),
                bucket(&["gold"], Sector::Gold),
                bucket(&["liquid"], Sector::Liquid),
            ],
        }
    }
}

/// Assigns one holding to a sector bucket. Mutual funds are bucketed by
/// case-insensitive substring match on the fund name and default to Equity.
pub fn classify(asset: &AssetSnapshot, rules: &SectorRules) -> Sector {
    match asset.asset_type {
        AssetType::Stock => Sector::Equity,
        AssetType::Gold => Sector::Gold,
        AssetType::Ppf | AssetType::Epf | AssetType::FixedDeposit => Sector::Debt,
        AssetType::MutualFund => {
            let name = asset.name.to_lowercase();
            for bucket in &rules.fund_buckets {
                if bucket.keywords.iter().any(|k| name.contains(k.as_str())) {
                    return bucket.sector;
                }
            }
            Sector::Equity
        }
        AssetType::Other => Sector::Other,
    }
}

/// Sector shares of total value plus the diversification score and any
/// concentration warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorAnalysis {
    pub sector_percentages: BTreeMap<Sector, f64>,
    pub diversification_score: f64,
    pub warnings: Vec<String>,
}

/// Sums current value per sector and converts to percentages of the total
/// portfolio value. A zero-value portfolio yields empty percentages, a
/// score of 0 and no warnings.
pub fn analyze_sectors(
    assets: &[AssetSnapshot],
    rules: &SectorRules,
) -> Result<SectorAnalysis, NesteggError> {
    for a in assets {
        NesteggError::ensure_finite(a.current_value, "current value")?;
    }

    let mut sector_values: BTreeMap<Sector, f64> = BTreeMap::new();
    for asset in assets {
        *sector_values.entry(classify(asset, rules)).or_insert(0.0) += asset.current_value;
    }

    let total: f64 = sector_values.values().sum();
    if total == 0.0 {
        return Ok(SectorAnalysis {
            sector_percentages: BTreeMap::new(),
            diversification_score: 0.0,
            warnings: Vec::new(),
        });
    }

    let sector_percentages: BTreeMap<Sector, f64> = sector_values
        .into_iter()
        .map(|(sector, value)| (sector, value / total * 100.0))
        .collect();

    let diversification_score = diversification_score(&sector_percentages);

    let mut warnings = Vec::new();
    for (sector, pct) in &sector_percentages {
        if *pct > CONCENTRATION_THRESHOLD_PCT {
            warnings.push(format!(
                "{sector} holds {pct:.1}% of the portfolio, above the \
                 {CONCENTRATION_THRESHOLD_PCT:.0}% concentration threshold"
            ));
        }
    }

    Ok(SectorAnalysis {
        sector_percentages,
        diversification_score,
        warnings,
    })
}

/// Shannon entropy of the allocation, normalized by the maximum entropy for
/// the number of sectors present and scaled to [0, 100]. 100 means a
/// perfectly even split; 0 means full concentration (or fewer than two
/// sectors, where the normalizer ln(1) would be zero).
fn diversification_score(percentages: &BTreeMap<Sector, f64>) -> f64 {
    let count = percentages.len();
    if count < 2 {
        return 0.0;
    }

    let entropy: f64 = percentages
        .values()
        .filter(|&&pct| pct > 0.0)
        .map(|&pct| {
            let p = pct / 100.0;
            -p * p.ln()
        })
        .sum();

    entropy / (count as f64).ln() * 100.0
}
