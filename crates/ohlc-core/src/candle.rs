//! OHLCV candle type and sequence helpers.
//!
//! A candle sequence is a plain slice ordered oldest to newest. The engine
//! trusts that ordering and never inspects timestamps or spacing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::num::TaFloat;

/// A single OHLCV candle.
///
/// Volume is optional; indicators that weight by volume treat a missing value
/// as `1`.
///
/// # Example
///
/// ```rust
/// use ohlc_core::Candle;
///
/// let candle = Candle::new(100.0, 105.0, 98.0, 103.0).with_volume(1_000.0);
/// assert!(candle.is_valid());
/// assert_eq!(candle.typical_price(), (105.0 + 98.0 + 103.0) / 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct Candle<T: TaFloat> {
    /// Opening price for the period.
    pub open: T,
    /// Highest price during the period.
    pub high: T,
    /// Lowest price during the period.
    pub low: T,
    /// Closing price for the period.
    pub close: T,
    /// Traded volume, if the feed supplies it.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub volume: Option<T>,
}

impl<T: TaFloat> Candle<T> {
    /// Create a candle without volume.
    #[must_use]
    pub fn new(open: T, high: T, low: T, close: T) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    /// Create a candle where every price equals `price`.
    #[must_use]
    pub fn flat(price: T) -> Self {
        Self::new(price, price, price, price)
    }

    /// Set the volume (builder pattern).
    #[must_use]
    pub fn with_volume(mut self, volume: T) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Volume, or `1` when the candle carries none.
    #[must_use]
    pub fn volume_or_default(&self) -> T {
        self.volume.unwrap_or(T::ONE)
    }

    /// Typical price: (High + Low + Close) / 3.
    #[must_use]
    pub fn typical_price(&self) -> T {
        (self.high + self.low + self.close) / T::THREE
    }

    /// The candle's range: High - Low.
    #[must_use]
    pub fn range(&self) -> T {
        self.high - self.low
    }

    /// True range against the previous close.
    ///
    /// TR = max(High - Low, |High - PrevClose|, |Low - PrevClose|)
    #[must_use]
    pub fn true_range(&self, prev_close: T) -> T {
        let hl = self.high - self.low;
        let hc = (self.high - prev_close).abs();
        let lc = (self.low - prev_close).abs();
        hl.max(hc).max(lc)
    }

    /// Check the candle against basic OHLCV sanity rules.
    ///
    /// A valid candle has finite prices, `low <= open, close <= high`, and a
    /// finite non-negative volume when one is present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.check().is_none()
    }

    fn check(&self) -> Option<&'static str> {
        if !(self.open.is_valid()
            && self.high.is_valid()
            && self.low.is_valid()
            && self.close.is_valid())
        {
            return Some("non-finite price");
        }
        if self.low > self.high {
            return Some("low above high");
        }
        if self.open < self.low || self.open > self.high {
            return Some("open outside low/high range");
        }
        if self.close < self.low || self.close > self.high {
            return Some("close outside low/high range");
        }
        match self.volume {
            Some(v) if !v.is_valid() || v < T::ZERO => Some("volume must be finite and non-negative"),
            _ => None,
        }
    }
}

/// Extract the close prices of a candle sequence.
#[must_use]
pub fn closes<T: TaFloat>(candles: &[Candle<T>]) -> Vec<T> {
    candles.iter().map(|c| c.close).collect()
}

/// Extract the typical prices of a candle sequence.
#[must_use]
pub fn typical_prices<T: TaFloat>(candles: &[Candle<T>]) -> Vec<T> {
    candles.iter().map(Candle::typical_price).collect()
}

/// Validate every candle in a sequence.
///
/// The indicators never call this; it exists for callers that prefer a hard
/// failure over silently degraded output.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidCandle`] for the first candle that fails
/// [`Candle::is_valid`].
pub fn validate_candles<T: TaFloat>(candles: &[Candle<T>]) -> Result<()> {
    for (index, candle) in candles.iter().enumerate() {
        if let Some(reason) = candle.check() {
            return Err(IndicatorError::InvalidCandle { index, reason });
        }
    }
    Ok(())
}
