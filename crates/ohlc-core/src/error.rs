//! Error types for configuration and input validation.
//!
//! Indicator computation itself never fails: every indicator has a defined
//! fallback for short input. Errors only come from validating configurations
//! and from the opt-in candle checks in [`crate::candle::validate_candles`].

use thiserror::Error;

/// Result type alias for validation operations that may fail.
pub type Result<T> = core::result::Result<T, IndicatorError>;

/// Errors raised by configuration and candle validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// A period parameter was zero.
    #[error("Invalid period '{name}': {value} (must be > 0)")]
    InvalidPeriod {
        /// Name of the period parameter.
        name: &'static str,
        /// Provided value.
        value: usize,
    },

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of expected value.
        expected: &'static str,
    },

    /// A candle in the input sequence failed validation.
    #[error("Invalid candle at index {index}: {reason}")]
    InvalidCandle {
        /// Position of the offending candle in the sequence.
        index: usize,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl IndicatorError {
    /// Check that `value` is a non-zero period.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidPeriod`] when `value` is zero.
    pub fn check_period(name: &'static str, value: usize) -> Result<()> {
        if value == 0 {
            return Err(Self::InvalidPeriod { name, value });
        }
        Ok(())
    }

    /// Check that `value` is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidParameter`] otherwise.
    pub fn check_positive(name: &'static str, value: f64) -> Result<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(Self::InvalidParameter {
                name,
                value: value.to_string(),
                expected: "finite positive number",
            });
        }
        Ok(())
    }
}
