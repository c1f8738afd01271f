//! Moving Average Convergence Divergence (MACD).
//!
//! MACD is the difference between a fast and a slow EMA of closes, with an
//! EMA of that difference as the signal line.

use ohlc_core::{candle::closes, Candle, Indicator, IndicatorError, Result, TaFloat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::smoothing::ema;

/// Configuration for the MACD indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacdConfig {
    /// Fast EMA period (default: 12).
    pub fast: usize,
    /// Slow EMA period (default: 26). Also the minimum number of closes.
    pub slow: usize,
    /// Signal line EMA period (default: 9).
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl MacdConfig {
    /// Create a new MACD configuration.
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }
}

/// Output of the MACD indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct MacdOutput<T: TaFloat> {
    /// MACD line (fast EMA - slow EMA).
    pub macd: T,
    /// Signal line (EMA of the MACD line).
    pub signal: T,
    /// Histogram (MACD - Signal).
    pub histogram: T,
}

impl<T: TaFloat> MacdOutput<T> {
    /// Create an output from the line and signal values.
    pub fn new(macd: T, signal: T) -> Self {
        Self {
            macd,
            signal,
            histogram: macd - signal,
        }
    }

    /// The all-zero fallback.
    pub fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO)
    }
}

/// MACD of the latest close with the given periods.
///
/// Both EMAs run over the full close sequence (seeded with the first close),
/// the MACD line is their pointwise difference, and the signal line is the
/// EMA of that whole line. Returns the all-zero triple when fewer than `slow`
/// closes are available.
#[must_use]
pub fn macd_with<T: TaFloat>(closes: &[T], fast: usize, slow: usize, signal: usize) -> MacdOutput<T> {
    if closes.is_empty() || closes.len() < slow {
        return MacdOutput::zero();
    }

    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);
    let line: Vec<T> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(&f, &s)| f - s)
        .collect();
    let signal_line = ema(&line, signal);

    match (line.last(), signal_line.last()) {
        (Some(&m), Some(&s)) => MacdOutput::new(m, s),
        _ => MacdOutput::zero(),
    }
}

/// MACD(12, 26, 9) of the latest close.
///
/// # Example
///
/// ```rust
/// use ohlc_indicators::macd;
///
/// let short = vec![100.0; 25];
/// let out = macd(&short);
/// assert_eq!((out.macd, out.signal, out.histogram), (0.0, 0.0, 0.0));
/// ```
#[must_use]
pub fn macd<T: TaFloat>(closes: &[T]) -> MacdOutput<T> {
    let config = MacdConfig::default();
    macd_with(closes, config.fast, config.slow, config.signal)
}

impl<T: TaFloat> Indicator<T> for MacdConfig {
    type Output = MacdOutput<T>;

    fn name(&self) -> &'static str {
        "macd"
    }

    fn min_periods(&self) -> usize {
        self.slow
    }

    fn compute(&self, candles: &[Candle<T>]) -> MacdOutput<T> {
        macd_with(&closes(candles), self.fast, self.slow, self.signal)
    }

    fn validate(&self) -> Result<()> {
        IndicatorError::check_period("fast", self.fast)?;
        IndicatorError::check_period("slow", self.slow)?;
        IndicatorError::check_period("signal", self.signal)
    }
}
