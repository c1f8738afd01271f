//! Simple Moving Average (SMA).
//!
//! The SMA is the unweighted mean of the last n values.

use ohlc_core::{candle::closes, utils, Candle, Indicator, IndicatorError, Result, TaFloat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean of the last `period` values.
///
/// When `values` is shorter than `period` the last element is returned
/// unchanged, so short histories degrade to "latest value" instead of failing.
/// An empty slice yields zero. A zero period is treated as `1`.
///
/// # Example
///
/// ```rust
/// use ohlc_indicators::sma;
///
/// assert_eq!(sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3), 4.0);
/// assert_eq!(sma(&[1.0, 2.0], 3), 2.0);
/// ```
#[must_use]
pub fn sma<T: TaFloat>(values: &[T], period: usize) -> T {
    let period = period.max(1);
    match values.last() {
        None => T::ZERO,
        Some(&last) if values.len() < period => last,
        Some(_) => utils::mean(utils::trailing(values, period)),
    }
}

/// Configuration for the SMA of close prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmaConfig {
    /// Number of trailing values averaged.
    pub period: usize,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl SmaConfig {
    /// Create a new SMA configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl<T: TaFloat> Indicator<T> for SmaConfig {
    type Output = T;

    fn name(&self) -> &'static str {
        "sma"
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle<T>]) -> T {
        sma(&closes(candles), self.period)
    }

    fn validate(&self) -> Result<()> {
        IndicatorError::check_period("period", self.period)
    }
}
