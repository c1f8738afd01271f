//! Commodity Channel Index (CCI).
//!
//! Measures how far the latest typical price sits from its moving average,
//! in units of mean absolute deviation.

use ohlc_core::{candle::typical_prices, utils, Candle, Indicator, IndicatorError, Result, TaFloat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::smoothing::sma;

/// Lambert's scaling constant.
pub const CCI_CONSTANT: f64 = 0.015;

/// CCI of the latest candle.
///
/// # Formula
///
/// ```text
/// TP  = (high + low + close) / 3
/// CCI = (TP_last - SMA(TP, period)) / (0.015 * mean |TP_i - SMA(TP, period)|)
/// ```
///
/// The deviation is taken over the trailing `period` typical prices.
/// Returns `0` when fewer than `period` candles are available.
///
/// # Zero deviation
///
/// When every typical price in the window is identical the mean absolute
/// deviation is zero and the division is left unguarded: the result is NaN
/// (`0 / 0`). Callers that need a finite value must check
/// [`TaFloat::is_valid`] themselves.
#[must_use]
pub fn cci<T: TaFloat>(candles: &[Candle<T>], period: usize) -> T {
    let period = period.max(1);
    if candles.len() < period {
        return T::ZERO;
    }

    let tp = typical_prices(candles);
    let mean_tp = sma(&tp, period);
    let deviation = utils::mean_abs_deviation(utils::trailing(&tp, period), mean_tp);
    let current = tp[tp.len() - 1];

    (current - mean_tp) / (T::from_f64_lossy(CCI_CONSTANT) * deviation)
}

/// Configuration for the CCI indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CciConfig {
    /// Window for the typical-price average and deviation (default: 20).
    pub period: usize,
}

impl Default for CciConfig {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl CciConfig {
    /// Create a new CCI configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl<T: TaFloat> Indicator<T> for CciConfig {
    type Output = T;

    fn name(&self) -> &'static str {
        "cci"
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle<T>]) -> T {
        cci(candles, self.period)
    }

    fn validate(&self) -> Result<()> {
        IndicatorError::check_period("period", self.period)
    }
}
