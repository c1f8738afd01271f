//! Trend strength estimate reported as ADX.
//!
//! This is not Wilder's Average Directional Index. There is no directional
//! movement or true-range smoothing here: the value is the relative drift of
//! a moving average of closes over a short lag, scaled into the 0..=100 range
//! that ADX readers expect.

use ohlc_core::{candle::closes, Candle, Indicator, IndicatorError, Result, TaFloat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::smoothing::sma;

/// Configuration for the trend strength estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdxConfig {
    /// Gate period: fewer than `2 * period` candles yields the default (14).
    pub period: usize,
    /// SMA window compared across the lag (default: 20).
    pub trend_window: usize,
    /// Number of trailing candles dropped for the earlier SMA (default: 5).
    pub lag: usize,
    /// Multiplier applied to the relative change (default: 1000).
    pub scale: f64,
    /// Upper bound of the estimate (default: 100).
    pub cap: f64,
    /// Value returned for short input (default: 25).
    pub fallback: f64,
}

impl Default for AdxConfig {
    fn default() -> Self {
        Self {
            period: 14,
            trend_window: 20,
            lag: 5,
            scale: 1000.0,
            cap: 100.0,
            fallback: 25.0,
        }
    }
}

impl AdxConfig {
    /// Create a configuration with the given gate period and default heuristics.
    pub fn new(period: usize) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    /// Set the SMA window and lag.
    pub fn with_window(mut self, trend_window: usize, lag: usize) -> Self {
        self.trend_window = trend_window;
        self.lag = lag;
        self
    }

    /// Set the scale factor and cap.
    pub fn with_scale(mut self, scale: f64, cap: f64) -> Self {
        self.scale = scale;
        self.cap = cap;
        self
    }
}

/// Trend strength of the latest candle with explicit heuristic parameters.
///
/// ```text
/// now    = SMA(closes, trend_window)
/// before = SMA(closes[..len - lag], trend_window)
/// value  = min(cap, |now - before| / |before| * scale)
/// ```
///
/// Returns `config.fallback` when fewer than `2 * period` candles are
/// available and `0` when `before` is zero.
#[must_use]
pub fn adx_with<T: TaFloat>(candles: &[Candle<T>], config: &AdxConfig) -> T {
    if candles.len() < config.period.max(1).saturating_mul(2) {
        return T::from_f64_lossy(config.fallback);
    }

    let closes = closes(candles);
    let now = sma(&closes, config.trend_window);
    let cut = closes.len().saturating_sub(config.lag);
    let before = sma(&closes[..cut], config.trend_window);

    if before == T::ZERO {
        return T::ZERO;
    }
    let change = ((now - before) / before).abs() * T::from_f64_lossy(config.scale);
    change.min(T::from_f64_lossy(config.cap))
}

/// Simplified trend strength of the latest candle.
///
/// Returns `25` when fewer than `2 * period` candles are available. Otherwise
/// compares the 20-period SMA of closes with the same SMA five candles
/// earlier; the relative change times 1000, capped at 100, is the result.
/// This is an approximation, not a canonical Wilder ADX.
///
/// # Example
///
/// ```rust
/// use ohlc_core::Candle;
/// use ohlc_indicators::adx;
///
/// let short: Vec<Candle<f64>> = vec![Candle::flat(10.0); 27];
/// assert_eq!(adx(&short, 14), 25.0);
///
/// let flat: Vec<Candle<f64>> = vec![Candle::flat(10.0); 28];
/// assert_eq!(adx(&flat, 14), 0.0);
/// ```
#[must_use]
pub fn adx<T: TaFloat>(candles: &[Candle<T>], period: usize) -> T {
    adx_with(candles, &AdxConfig::new(period))
}

impl<T: TaFloat> Indicator<T> for AdxConfig {
    type Output = T;

    fn name(&self) -> &'static str {
        "adx"
    }

    fn min_periods(&self) -> usize {
        self.period.saturating_mul(2)
    }

    fn compute(&self, candles: &[Candle<T>]) -> T {
        adx_with(candles, self)
    }

    fn validate(&self) -> Result<()> {
        IndicatorError::check_period("period", self.period)?;
        IndicatorError::check_period("trend_window", self.trend_window)?;
        IndicatorError::check_positive("scale", self.scale)?;
        IndicatorError::check_positive("cap", self.cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_candles(closes: &[f64]) -> Vec<Candle<f64>> {
        closes.iter().map(|&c| Candle::flat(c)).collect()
    }

    #[test]
    fn test_adx_default_config() {
        let config = AdxConfig::default();
        assert_eq!(config.period, 14);
        assert_eq!(config.trend_window, 20);
        assert_eq!(config.lag, 5);
        assert_eq!(config.scale, 1000.0);
        assert_eq!(config.cap, 100.0);
        assert_eq!(config.fallback, 25.0);
    }

    #[test]
    fn test_adx_insufficient_data_is_25() {
        let candles = flat_candles(&[1.0; 27]);
        assert_eq!(adx(&candles, 14), 25.0);
        assert_eq!(adx::<f64>(&[], 14), 25.0);
    }

    #[test]
    fn test_adx_small_drift() {
        // 28 closes rising by 0.01 from 100.
        // now    = mean(closes[8..28])  = 100 + 0.01 * 17.5
        // before = mean(closes[3..23])  = 100 + 0.01 * 12.5
        let closes: Vec<f64> = (0..28).map(|i| 100.0 + 0.01 * f64::from(i)).collect();
        let now = 100.175;
        let before = 100.125;
        let expected = (now - before) / before * 1000.0;

        let value = adx(&flat_candles(&closes), 14);
        assert_relative_eq!(value, expected, epsilon = 1e-9);
        assert!(value < 100.0);
    }

    #[test]
    fn test_adx_falling_drift_is_positive() {
        let closes: Vec<f64> = (0..28).map(|i| 100.0 - 0.01 * f64::from(i)).collect();
        let value = adx(&flat_candles(&closes), 14);
        assert!(value > 0.0);
    }

    #[test]
    fn test_adx_capped_at_100() {
        let closes: Vec<f64> = (0..40).map(|i| 10.0 + f64::from(i)).collect();
        assert_eq!(adx(&flat_candles(&closes), 14), 100.0);
    }

    #[test]
    fn test_adx_zero_base_average() {
        let mut closes = vec![0.0; 28];
        closes[27] = 5.0;
        assert_eq!(adx(&flat_candles(&closes), 14), 0.0);
    }

    #[test]
    fn test_adx_custom_heuristics() {
        let closes: Vec<f64> = (0..10).map(|i| 100.0 + f64::from(i)).collect();
        let config = AdxConfig::new(2).with_window(3, 1).with_scale(100.0, 50.0);
        // now = mean(107, 108, 109) = 108, before = mean(106, 107, 108) = 107
        let expected = (108.0 - 107.0) / 107.0 * 100.0;
        assert_relative_eq!(adx_with(&flat_candles(&closes), &config), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_adx_huge_period_is_fallback() {
        let candles = flat_candles(&[1.0, 2.0, 3.0]);
        assert_eq!(adx(&candles, usize::MAX), 25.0);
        assert_eq!(adx(&candles, usize::MAX / 2 + 1), 25.0);
        let config = AdxConfig::new(usize::MAX);
        assert_eq!(Indicator::<f64>::min_periods(&config), usize::MAX);
    }
}
