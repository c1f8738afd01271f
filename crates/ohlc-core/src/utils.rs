//! Window and statistics helpers shared by the indicators.
//!
//! All helpers operate on plain slices and are total: an empty input yields
//! zero rather than NaN so callers can chain them without extra guards.

use crate::num::TaFloat;

/// The trailing `n` elements of `data` (all of it when shorter).
///
/// # Example
///
/// ```rust
/// use ohlc_core::utils::trailing;
///
/// let data = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(trailing(&data, 2), &[3.0, 4.0]);
/// assert_eq!(trailing(&data, 10), &data);
/// ```
#[must_use]
pub fn trailing<T>(data: &[T], n: usize) -> &[T] {
    &data[data.len().saturating_sub(n)..]
}

/// Arithmetic mean. Zero for an empty slice.
#[must_use]
pub fn mean<T: TaFloat>(data: &[T]) -> T {
    if data.is_empty() {
        return T::ZERO;
    }
    let sum = data.iter().fold(T::ZERO, |acc, &v| acc + v);
    sum / T::from_usize(data.len())
}

/// Population standard deviation (divides by `n`, not `n - 1`).
#[must_use]
pub fn population_std<T: TaFloat>(data: &[T]) -> T {
    if data.is_empty() {
        return T::ZERO;
    }
    let m = mean(data);
    let sum_sq = data.iter().fold(T::ZERO, |acc, &v| {
        let d = v - m;
        acc + d * d
    });
    (sum_sq / T::from_usize(data.len())).sqrt()
}

/// Mean absolute deviation of `data` around `center`.
#[must_use]
pub fn mean_abs_deviation<T: TaFloat>(data: &[T], center: T) -> T {
    if data.is_empty() {
        return T::ZERO;
    }
    let sum = data.iter().fold(T::ZERO, |acc, &v| acc + (v - center).abs());
    sum / T::from_usize(data.len())
}

/// Largest value in the slice, NaN for an empty slice.
#[must_use]
pub fn highest<T: TaFloat>(data: &[T]) -> T {
    data.iter().copied().fold(T::NAN, T::max)
}

/// Smallest value in the slice, NaN for an empty slice.
#[must_use]
pub fn lowest<T: TaFloat>(data: &[T]) -> T {
    data.iter().copied().fold(T::NAN, T::min)
}
