//! Core trait definitions for indicators.

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

use crate::candle::Candle;
use crate::error::Result;
use crate::num::TaFloat;

/// Configuration trait bounds for indicator configurations.
#[cfg(feature = "serde")]
pub trait IndicatorConfig: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

/// Configuration trait bounds for indicator configurations.
#[cfg(not(feature = "serde"))]
pub trait IndicatorConfig: Clone + Default + Send + Sync {}

#[cfg(feature = "serde")]
impl<T> IndicatorConfig for T where T: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

#[cfg(not(feature = "serde"))]
impl<T> IndicatorConfig for T where T: Clone + Default + Send + Sync {}

/// Core trait for technical indicators.
///
/// An indicator is a configuration value: it owns its parameters and nothing
/// else. [`Indicator::compute`] is a pure function of the configuration and
/// the candle slice, so the same configuration can be shared across threads
/// and reused for any number of sequences.
///
/// Computation is total. When the slice is shorter than
/// [`Indicator::min_periods`] the indicator returns its documented fallback
/// value instead of an error.
///
/// # Example Implementation
///
/// ```rust
/// use ohlc_core::{Candle, Indicator, TaFloat};
///
/// #[derive(Clone, Default)]
/// struct LastClose;
///
/// impl<T: TaFloat> Indicator<T> for LastClose {
///     type Output = T;
///
///     fn name(&self) -> &'static str { "last_close" }
///     fn min_periods(&self) -> usize { 1 }
///     fn compute(&self, candles: &[Candle<T>]) -> T {
///         candles.last().map_or(T::ZERO, |c| c.close)
///     }
/// }
///
/// let candles = [Candle::flat(1.0), Candle::flat(2.0)];
/// assert_eq!(LastClose.compute(&candles), 2.0);
/// ```
pub trait Indicator<T: TaFloat>: Send + Sync {
    /// The output type of a calculation.
    type Output;

    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Minimum number of candles for a non-fallback result.
    fn min_periods(&self) -> usize;

    /// Compute the indicator over an ordered candle sequence.
    fn compute(&self, candles: &[Candle<T>]) -> Self::Output;

    /// Check the configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is out of range.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Whether `candles` is long enough to avoid the fallback value.
    fn is_ready(&self, candles: &[Candle<T>]) -> bool {
        candles.len() >= self.min_periods()
    }
}
