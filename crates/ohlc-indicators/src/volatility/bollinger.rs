//! Bollinger Bands.
//!
//! Volatility bands placed a multiple of the standard deviation above and
//! below a simple moving average.

use ohlc_core::{candle::closes, utils, Candle, Indicator, IndicatorError, Result, TaFloat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::smoothing::sma;

/// Configuration for Bollinger Bands.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BollingerConfig {
    /// The window size for the moving average (default: 20).
    pub period: usize,
    /// Number of standard deviations for the bands (default: 2.0).
    pub multiplier: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            period: 20,
            multiplier: 2.0,
        }
    }
}

impl BollingerConfig {
    /// Create a new Bollinger Bands configuration.
    pub fn new(period: usize, multiplier: f64) -> Self {
        Self { period, multiplier }
    }
}

/// Output of the Bollinger Bands indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct BollingerOutput<T: TaFloat> {
    /// Upper band (middle + multiplier * std).
    pub upper: T,
    /// Middle band (SMA).
    pub middle: T,
    /// Lower band (middle - multiplier * std).
    pub lower: T,
}

impl<T: TaFloat> BollingerOutput<T> {
    /// Create a new Bollinger output.
    pub fn new(upper: T, middle: T, lower: T) -> Self {
        Self {
            upper,
            middle,
            lower,
        }
    }

    /// The all-zero fallback.
    pub fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO)
    }

    /// Distance between the upper and lower band.
    pub fn width(&self) -> T {
        self.upper - self.lower
    }
}

/// Bollinger Bands of the latest close.
///
/// The deviation is the population standard deviation (divide by `period`)
/// of the trailing `period` closes. Returns the all-zero triple when fewer
/// than `period` closes are available.
///
/// # Example
///
/// ```rust
/// use ohlc_indicators::bollinger_bands;
///
/// let bands = bollinger_bands(&[50.0; 20], 20, 2.0);
/// assert_eq!((bands.upper, bands.middle, bands.lower), (50.0, 50.0, 50.0));
/// ```
#[must_use]
pub fn bollinger_bands<T: TaFloat>(closes: &[T], period: usize, multiplier: T) -> BollingerOutput<T> {
    let period = period.max(1);
    if closes.len() < period {
        return BollingerOutput::zero();
    }

    let middle = sma(closes, period);
    let band = multiplier * utils::population_std(utils::trailing(closes, period));
    BollingerOutput::new(middle + band, middle, middle - band)
}

impl<T: TaFloat> Indicator<T> for BollingerConfig {
    type Output = BollingerOutput<T>;

    fn name(&self) -> &'static str {
        "bollinger"
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle<T>]) -> BollingerOutput<T> {
        bollinger_bands(&closes(candles), self.period, T::from_f64_lossy(self.multiplier))
    }

    fn validate(&self) -> Result<()> {
        IndicatorError::check_period("period", self.period)?;
        IndicatorError::check_positive("multiplier", self.multiplier)
    }
}
