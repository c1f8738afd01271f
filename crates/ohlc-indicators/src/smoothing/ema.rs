//! Exponential Moving Average (EMA).
//!
//! The EMA gives more weight to recent values using an exponential
//! smoothing factor.

use ohlc_core::{candle::closes, Candle, Indicator, IndicatorError, Result, TaFloat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full EMA series of `values`.
///
/// The series is seeded with `values[0]` (not with an SMA of the first
/// `period` values) and then follows
///
/// ```text
/// k = 2 / (period + 1)
/// ema[i] = values[i] * k + ema[i - 1] * (1 - k)
/// ```
///
/// The output always has the same length as the input. A zero period is
/// treated as `1`.
///
/// # Example
///
/// ```rust
/// use ohlc_indicators::ema;
///
/// // period 3 -> k = 0.5
/// assert_eq!(ema(&[2.0, 4.0, 8.0], 3), vec![2.0, 3.0, 5.5]);
/// ```
#[must_use]
pub fn ema<T: TaFloat>(values: &[T], period: usize) -> Vec<T> {
    let k = T::TWO / T::from_usize(period.max(1).saturating_add(1));
    let one_minus_k = T::ONE - k;

    let mut result = Vec::with_capacity(values.len());
    let mut iter = values.iter().copied();
    if let Some(seed) = iter.next() {
        let mut prev = seed;
        result.push(prev);
        for value in iter {
            prev = value * k + prev * one_minus_k;
            result.push(prev);
        }
    }
    result
}

/// Configuration for the EMA of close prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmaConfig {
    /// The EMA period.
    pub period: usize,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self { period: 12 }
    }
}

impl EmaConfig {
    /// Create a new EMA configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Smoothing factor `2 / (period + 1)`.
    pub fn alpha<T: TaFloat>(&self) -> T {
        T::TWO / T::from_usize(self.period.max(1).saturating_add(1))
    }
}

impl<T: TaFloat> Indicator<T> for EmaConfig {
    type Output = Vec<T>;

    fn name(&self) -> &'static str {
        "ema"
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, candles: &[Candle<T>]) -> Vec<T> {
        ema(&closes(candles), self.period)
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
    fn test_ema_alpha_calculation() {
        let config = EmaConfig::new(14);
        assert_relative_eq!(config.alpha::<f64>(), 2.0 / 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ema_seeded_with_first_value() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = ema(&values, 3);

        assert_eq!(result.len(), values.len());
        assert_eq!(result[0], 1.0);
        // k = 0.5
        assert_relative_eq!(result[1], 1.5, epsilon = 1e-12);
        assert_relative_eq!(result[2], 2.25, epsilon = 1e-12);
        assert_relative_eq!(result[3], 3.125, epsilon = 1e-12);
        assert_relative_eq!(result[4], 4.0625, epsilon = 1e-12);
    }

    #[test]
    fn test_ema_empty() {
        assert!(ema::<f64>(&[], 9).is_empty());
    }

    #[test]
    fn test_ema_constant_input_stays_constant() {
        let result = ema(&[42.0; 50], 10);
        for value in result {
            assert_relative_eq!(value, 42.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_ema_period_one_is_identity() {
        let values = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(ema(&values, 1), values.to_vec());
        assert_eq!(ema(&values, 0), values.to_vec());
    }

    #[test]
    fn test_ema_huge_period_stays_near_seed() {
        let result = ema(&[1.0, 2.0, 3.0], usize::MAX);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0], 1.0);
        assert!(result.iter().all(|v: &f64| v.is_finite() && *v < 1.0 + 1e-9));
        assert!(EmaConfig::new(usize::MAX).alpha::<f64>() > 0.0);
    }
}
