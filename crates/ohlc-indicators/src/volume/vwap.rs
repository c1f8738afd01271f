//! Volume Weighted Average Price (VWAP).

use ohlc_core::{Candle, Indicator, TaFloat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cumulative VWAP over the entire candle sequence.
///
/// ```text
/// VWAP = sum(TP_i * V_i) / sum(V_i),  TP = (high + low + close) / 3
/// ```
///
/// The sequence is not windowed. A candle without volume counts with a
/// volume of `1`. Returns `0` when the cumulative volume is zero.
///
/// # Example
///
/// ```rust
/// use ohlc_core::Candle;
/// use ohlc_indicators::vwap;
///
/// let candles = vec![
///     Candle::flat(10.0).with_volume(1.0),
///     Candle::flat(20.0).with_volume(3.0),
/// ];
/// assert_eq!(vwap(&candles), 17.5);
/// ```
#[must_use]
pub fn vwap<T: TaFloat>(candles: &[Candle<T>]) -> T {
    let (pv, volume) = candles.iter().fold((T::ZERO, T::ZERO), |(pv, vol), c| {
        let v = c.volume_or_default();
        (pv + c.typical_price() * v, vol + v)
    });

    if volume == T::ZERO {
        return T::ZERO;
    }
    pv / volume
}

/// Configuration for the VWAP indicator.
///
/// VWAP has no tunable parameters; the type exists so it can be driven through
/// [`Indicator`] like every other indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VwapConfig;

impl<T: TaFloat> Indicator<T> for VwapConfig {
    type Output = T;

    fn name(&self) -> &'static str {
        "vwap"
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, candles: &[Candle<T>]) -> T {
        vwap(candles)
    }
}
