//! Report output port trait.

use crate::domain::error::NesteggError;
use crate::domain::report::AnalyticsReport;
use std::path::Path;

/// Port for writing a rendered analytics report.
pub trait ReportPort {
    fn write(&self, report: &AnalyticsReport, output_path: &Path) -> Result<(), NesteggError>;
}
