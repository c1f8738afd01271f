//! Average True Range (ATR).
//!
//! ATR is a volatility indicator that measures the average range of price
//! movement, including gaps from the previous close.

use ohlc_core::{utils, Candle, Indicator, IndicatorError, Result, TaFloat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the ATR indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtrConfig {
    /// Number of true-range values averaged (default: 14).
    pub period: usize,
}

impl Default for AtrConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl AtrConfig {
    /// Create a new ATR configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// True range of every candle after the first.
///
/// `result[i]` is the true range of `candles[i + 1]` against the close of
/// `candles[i]`, so the output is one shorter than the input.
#[must_use]
pub fn true_ranges<T: TaFloat>(candles: &[Candle<T>]) -> Vec<T> {
    candles
        .windows(2)
        .map(|w| w[1].true_range(w[0].close))
        .collect()
}

/// ATR of the latest candle.
///
/// # Formula
///
/// ```text
/// TR  = max(high - low, |high - prev_close|, |low - prev_close|)
/// ATR = mean of the trailing `period` TR values
/// ```
///
/// This is a plain average, not Wilder's smoothed ATR. Returns `0` when fewer
/// than `period + 1` candles are available.
#[must_use]
pub fn atr<T: TaFloat>(candles: &[Candle<T>], period: usize) -> T {
    let period = period.max(1);
    if candles.len() <= period {
        return T::ZERO;
    }
    utils::mean(utils::trailing(&true_ranges(candles), period))
}

impl<T: TaFloat> Indicator<T> for AtrConfig {
    type Output = T;

    fn name(&self) -> &'static str {
        "atr"
    }

    fn min_periods(&self) -> usize {
        self.period.saturating_add(1)
    }

    fn compute(&self, candles: &[Candle<T>]) -> T {
        atr(candles, self.period)
    }

    fn validate(&self) -> Result<()> {
        IndicatorError::check_period("period", self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_atr_insufficient_data_is_zero() {
        let candles = vec![Candle::new(1.0, 3.0, 0.5, 2.0); 14];
        assert_eq!(atr(&candles, 14), 0.0);
    }

    #[test]
    fn test_atr_flat_candles_is_zero() {
        let candles = vec![Candle::flat(50.0); 20];
        assert_eq!(atr(&candles, 14), 0.0);
    }

    #[test]
    fn test_true_ranges_with_gaps() {
        let candles = vec![
            Candle::new(10.0, 11.0, 9.0, 10.0),
            // gap up: high - prev_close = 14 - 10 = 4
            Candle::new(13.0, 14.0, 12.0, 13.0),
            // inside bar: high - low = 2
            Candle::new(13.0, 14.0, 12.0, 12.5),
            // gap down: prev_close - low = 12.5 - 8 = 4.5
            Candle::new(9.0, 9.5, 8.0, 9.0),
        ];
        let tr = true_ranges(&candles);
        assert_eq!(tr.len(), 3);
        assert_relative_eq!(tr[0], 4.0, epsilon = 1e-12);
        assert_relative_eq!(tr[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(tr[2], 4.5, epsilon = 1e-12);

        // simple average of the trailing two: (2 + 4.5) / 2
        assert_relative_eq!(atr(&candles, 2), 3.25, epsilon = 1e-12);
        // all three
        assert_relative_eq!(atr(&candles, 3), 3.5, epsilon = 1e-12);
        assert_eq!(atr(&candles, 4), 0.0);
    }

    #[test]
    fn test_atr_config_compute() {
        let candles: Vec<Candle<f64>> = (0..20)
            .map(|i| {
                let c = 100.0 + f64::from(i);
                Candle::new(c, c + 1.0, c - 1.0, c)
            })
            .collect();
        // each step: max(2, |c+1 - (c-1)|, |c-1 - (c-1)|) = 2
        assert_relative_eq!(AtrConfig::default().compute(&candles), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_atr_huge_period_is_zero() {
        let candles = vec![Candle::new(1.0_f64, 3.0, 0.5, 2.0); 5];
        assert_eq!(atr(&candles, usize::MAX), 0.0);
        let config = AtrConfig::new(usize::MAX);
        assert_eq!(Indicator::<f64>::min_periods(&config), usize::MAX);
        assert_eq!(config.compute(&candles), 0.0);
    }
}
