//! Error types for the indicator engine.
//!
//! Insufficient data is never an error: indicators return a partial or empty
//! `IndicatorOutput`. The variants here cover caller contract violations only.

use thiserror::Error;

/// Caller contract violations detected before any computation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("series length mismatch: closes={closes}, highs={highs}, lows={lows}")]
    LengthMismatch {
        closes: usize,
        highs: usize,
        lows: usize,
    },

    #[error("non-finite value in {series} at index {index}")]
    NonFinite { series: &'static str, index: usize },

    #[error("invalid parameter for {indicator}: {reason}")]
    InvalidParameter {
        indicator: &'static str,
        reason: String,
    },
}

impl IndicatorError {
    pub(crate) fn invalid(indicator: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            indicator,
            reason: reason.into(),
        }
    }
}
