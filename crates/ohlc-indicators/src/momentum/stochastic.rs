//! Stochastic Oscillator.
//!
//! Compares the latest close to the high/low range of a trailing window.

use ohlc_core::{utils, Candle, Indicator, IndicatorError, Result, TaFloat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::smoothing::sma;

/// Configuration for the Stochastic Oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StochasticConfig {
    /// Lookback window for the high/low range (default: 14).
    pub period: usize,
    /// SMA length applied to raw %K (default: 3).
    pub smooth_k: usize,
    /// SMA length for %D (default: 3).
    pub smooth_d: usize,
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            period: 14,
            smooth_k: 3,
            smooth_d: 3,
        }
    }
}

impl StochasticConfig {
    /// Create a new configuration.
    pub fn new(period: usize, smooth_k: usize, smooth_d: usize) -> Self {
        Self {
            period,
            smooth_k,
            smooth_d,
        }
    }
}

/// Output of the Stochastic Oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct StochasticOutput<T: TaFloat> {
    /// Smoothed %K (0-100).
    pub k: T,
    /// %D (0-100).
    pub d: T,
}

impl<T: TaFloat> StochasticOutput<T> {
    /// Create a new output.
    pub fn new(k: T, d: T) -> Self {
        Self { k, d }
    }

    /// The neutral `{k: 50, d: 50}` fallback.
    pub fn neutral() -> Self {
        Self::new(T::FIFTY, T::FIFTY)
    }
}

fn raw_k<T: TaFloat>(window: &[Candle<T>]) -> T {
    let highs: Vec<T> = window.iter().map(|c| c.high).collect();
    let lows: Vec<T> = window.iter().map(|c| c.low).collect();
    let highest = utils::highest(&highs);
    let lowest = utils::lowest(&lows);
    let range = highest - lowest;
    let close = window[window.len() - 1].close;

    if range == T::ZERO {
        T::FIFTY
    } else {
        T::HUNDRED * (close - lowest) / range
    }
}

/// Stochastic %K / %D of the latest candle.
///
/// # Formula
///
/// ```text
/// raw %K[i] = 100 * (close[i] - lowest low) / (highest high - lowest low)
///             over candles[i + 1 - period ..= i], for i in period-1 .. len
/// %K = SMA(raw %K, smooth_k)
/// %D = SMA(last smooth_d * 2 raw %K values, smooth_d)
/// ```
///
/// %D is taken from the raw %K series, not from the smoothed %K line. A
/// window with no range (highest high equals lowest low) yields a raw %K of
/// `50`.
///
/// Returns `{k: 50, d: 50}` when fewer than `period` candles are available.
#[must_use]
pub fn stochastic<T: TaFloat>(
    candles: &[Candle<T>],
    period: usize,
    smooth_k: usize,
    smooth_d: usize,
) -> StochasticOutput<T> {
    let period = period.max(1);
    if candles.len() < period {
        return StochasticOutput::neutral();
    }

    let raw: Vec<T> = candles.windows(period).map(raw_k).collect();

    let k = sma(&raw, smooth_k);
    let d = sma(utils::trailing(&raw, smooth_d.saturating_mul(2)), smooth_d);
    StochasticOutput::new(k, d)
}

impl<T: TaFloat> Indicator<T> for StochasticConfig {
    type Output = StochasticOutput<T>;

    fn name(&self) -> &'static str {
        "stochastic"
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle<T>]) -> StochasticOutput<T> {
        stochastic(candles, self.period, self.smooth_k, self.smooth_d)
    }

    fn validate(&self) -> Result<()> {
        IndicatorError::check_period("period", self.period)?;
        IndicatorError::check_period("smooth_k", self.smooth_k)?;
        IndicatorError::check_period("smooth_d", self.smooth_d)
    }
}
