//! INI file configuration adapter.

use crate::domain::report::{AnalyticsConfig, DEFAULT_BENCHMARK_RETURN, DEFAULT_RISK_FREE_RATE};
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct IniConfigAdapter {
    config: Ini,
}

impl IniConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }
}

impl ConfigPort for IniConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }
}

/// Builds the engine tunables from an `[analytics]` section, falling back
/// to the documented defaults for anything missing.
pub fn build_analytics_config(port: &dyn ConfigPort) -> AnalyticsConfig {
    AnalyticsConfig {
        risk_free_rate: port.get_double("analytics", "risk_free_rate", DEFAULT_RISK_FREE_RATE),
        benchmark_return: port.get_double("analytics", "benchmark_return", DEFAULT_BENCHMARK_RETURN),
    }
}
