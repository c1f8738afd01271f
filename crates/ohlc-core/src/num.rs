//! Numeric type abstractions for indicator computations.
//!
//! This module defines the [`TaFloat`] trait which abstracts over `f32` and `f64`
//! so every indicator can be written once and run at either precision.

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Serialization bound that is only required when the `serde` feature is on.
#[cfg(feature = "serde")]
pub trait MaybeSerde: Serialize + DeserializeOwned {}

/// Serialization bound that is only required when the `serde` feature is on.
#[cfg(not(feature = "serde"))]
pub trait MaybeSerde {}

#[cfg(feature = "serde")]
impl<T> MaybeSerde for T where T: Serialize + DeserializeOwned {}

#[cfg(not(feature = "serde"))]
impl<T> MaybeSerde for T {}

/// Trait for floating-point types used in indicator calculations.
///
/// # Example
///
/// ```rust
/// use ohlc_core::TaFloat;
///
/// fn relative_strength<T: TaFloat>(avg_gain: T, avg_loss: T) -> T {
///     if avg_loss == T::ZERO {
///         return T::HUNDRED;
///     }
///     T::HUNDRED - T::HUNDRED / (T::ONE + avg_gain / avg_loss)
/// }
///
/// assert_eq!(relative_strength(1.0_f64, 0.0), 100.0);
/// assert_eq!(relative_strength(1.0_f64, 1.0), 50.0);
/// ```
pub trait TaFloat:
    Float + Copy + Send + Sync + Default + core::fmt::Debug + MaybeSerde + 'static
{
    /// Machine epsilon for this type.
    const EPSILON: Self;
    /// Not-a-number value.
    const NAN: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;
    /// Three value (typical price denominator).
    const THREE: Self;
    /// Fifty value, the neutral midpoint of bounded oscillators.
    const FIFTY: Self;
    /// Hundred value.
    const HUNDRED: Self;

    /// Convert from `f64`, rounding if the target is narrower.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is valid (not NaN and not infinite).
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

impl TaFloat for f32 {
    const EPSILON: Self = f32::EPSILON;
    const NAN: Self = f32::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const THREE: Self = 3.0;
    const FIFTY: Self = 50.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl TaFloat for f64 {
    const EPSILON: Self = f64::EPSILON;
    const NAN: Self = f64::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const THREE: Self = 3.0;
    const FIFTY: Self = 50.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}
