//! Relative Strength Index (RSI).
//!
//! RSI is a momentum oscillator that measures the speed and magnitude of
//! price changes on a 0..=100 scale.

use ohlc_core::{candle::closes, Candle, Indicator, IndicatorError, Result, TaFloat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RSI of the latest close using Wilder smoothing.
///
/// # Formula
///
/// ```text
/// avg_gain, avg_loss = mean gain / loss over the first `period` deltas
/// then for every further delta:
///     avg = (avg * (period - 1) + current) / period
/// RSI = 100 - 100 / (1 + avg_gain / avg_loss)
/// ```
///
/// Returns the neutral `50` when fewer than `period + 1` closes are available,
/// and `100` when the smoothed average loss is exactly zero.
///
/// # Example
///
/// ```rust
/// use ohlc_indicators::rsi;
///
/// let rising: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
/// assert_eq!(rsi(&rising, 14), 100.0);
/// assert_eq!(rsi(&rising[..14], 14), 50.0);
/// ```
#[must_use]
pub fn rsi<T: TaFloat>(closes: &[T], period: usize) -> T {
    let period = period.max(1);
    if closes.len() <= period {
        return T::FIFTY;
    }

    let p = T::from_usize(period);
    let mut deltas = closes.windows(2).map(|w| w[1] - w[0]);

    let mut avg_gain = T::ZERO;
    let mut avg_loss = T::ZERO;
    for delta in deltas.by_ref().take(period) {
        if delta > T::ZERO {
            avg_gain = avg_gain + delta;
        } else {
            avg_loss = avg_loss - delta;
        }
    }
    avg_gain = avg_gain / p;
    avg_loss = avg_loss / p;

    let p_minus_one = p - T::ONE;
    for delta in deltas {
        let gain = delta.max(T::ZERO);
        let loss = (-delta).max(T::ZERO);
        avg_gain = (avg_gain * p_minus_one + gain) / p;
        avg_loss = (avg_loss * p_minus_one + loss) / p;
    }

    if avg_loss == T::ZERO {
        return T::HUNDRED;
    }
    T::HUNDRED - T::HUNDRED / (T::ONE + avg_gain / avg_loss)
}

/// Configuration for the RSI indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RsiConfig {
    /// Number of deltas in the seed average and the Wilder smoothing length.
    pub period: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl RsiConfig {
    /// Create a new RSI configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl<T: TaFloat> Indicator<T> for RsiConfig {
    type Output = T;

    fn name(&self) -> &'static str {
        "rsi"
    }

    fn min_periods(&self) -> usize {
        self.period.saturating_add(1)
    }

    fn compute(&self, candles: &[Candle<T>]) -> T {
        rsi(&closes(candles), self.period)
    }

    fn validate(&self) -> Result<()> {
        IndicatorError::check_period("period", self.period)
    }
}
