//! Error types for the analytics engine.
//!
//! Degenerate numeric inputs (empty series, zero totals, non-convergence)
//! are absorbed into documented default values by each routine and never
//! surface here. The errors below cover caller contract violations
//! (non-finite amounts) and the operational shell (config, data files).

/// Top-level error type for nestegg.
#[derive(Debug, thiserror::Error)]
pub enum NesteggError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("failed to load {file}: {reason}")]
    DataLoad { file: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl NesteggError {
    /// Fail fast on NaN or infinite monetary values. These indicate a bug
    /// in the caller, not a data edge case, so they are not absorbed into
    /// a default the way empty or zero inputs are.
    pub fn ensure_finite(value: f64, what: &str) -> Result<(), NesteggError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(NesteggError::InvalidInput {
                reason: format!("{what} is not a finite number ({value})"),
            })
        }
    }

    pub fn ensure_all_finite(values: &[f64], what: &str) -> Result<(), NesteggError> {
        for &value in values {
            Self::ensure_finite(value, what)?;
        }
        Ok(())
    }
}

impl From<&NesteggError> for std::process::ExitCode {
    fn from(err: &NesteggError) -> Self {
        let code: u8 = match err {
            NesteggError::Io(_) => 1,
            NesteggError::ConfigParse { .. } | NesteggError::ConfigInvalid { .. } => 2,
            NesteggError::DataLoad { .. } => 3,
            NesteggError::InvalidInput { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
