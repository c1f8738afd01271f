//! Common test utilities for ohlc-ta.
//!
//! Float comparison and deterministic candle generators shared by the
//! report-level integration tests.

#![allow(dead_code)]

use ohlc_core::Candle;

/// Tiered float comparison.
///
/// NaN matches only NaN. Values near zero (|expected| < 1e-10) are compared
/// absolutely, everything else relatively.
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{context}: expected NaN but got {actual}");
        return;
    }

    if actual.is_nan() {
        panic!("{context}: got NaN but expected {expected}");
    }

    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{context}: expected {expected} but got {actual} (diff: {diff})"
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{context}: expected {expected} but got {actual} (rel diff: {rel_diff:.2e})"
    );
}

// ============================================================================
// Synthetic Data Generators
// ============================================================================

/// Constant close series.
pub fn generate_constant(value: f64, len: usize) -> Vec<f64> {
    vec![value; len]
}

/// Linear close series.
pub fn generate_linear(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// Random-walk close series with a deterministic seed.
pub fn generate_random_walk(start: f64, volatility: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        // [-1, 1]
        (state as f64 / u64::MAX as f64) * 2.0 - 1.0
    };

    let mut prices = Vec::with_capacity(len);
    let mut last = start;
    for i in 0..len {
        if i > 0 {
            last = (last + next() * volatility).max(0.01);
        }
        prices.push(last);
    }
    prices
}

/// Candles around a close series.
///
/// Each candle opens at the previous close and extends `range_pct` of the
/// close beyond the open/close body. Volume grows linearly with the index.
pub fn candles_from_closes(closes: &[f64], range_pct: f64) -> Vec<Candle<f64>> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let range = close * range_pct;
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = close.max(open) + range * 0.5;
            let low = close.min(open) - range * 0.5;
            Candle::new(open, high, low, close).with_volume(1000.0 + i as f64 * 100.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_float_eq_normal() {
        assert_float_eq(1.0, 1.0, 1e-10, "test");
        assert_float_eq(100.0, 100.0000001, 1e-6, "test");
    }

    #[test]
    fn test_assert_float_eq_nan() {
        assert_float_eq(f64::NAN, f64::NAN, 1e-10, "test");
    }

    #[test]
    #[should_panic]
    fn test_assert_float_eq_nan_mismatch() {
        assert_float_eq(1.0, f64::NAN, 1e-10, "test");
    }

    #[test]
    fn test_generate_linear() {
        assert_eq!(generate_linear(100.0, 1.0, 4), vec![100.0, 101.0, 102.0, 103.0]);
    }

    #[test]
    fn test_generate_random_walk_deterministic() {
        let a = generate_random_walk(100.0, 1.0, 10, 12345);
        let b = generate_random_walk(100.0, 1.0, 10, 12345);
        assert_eq!(a, b);
        assert_eq!(a[0], 100.0);
    }

    #[test]
    fn test_candles_from_closes_are_valid() {
        let closes = generate_random_walk(50.0, 2.0, 100, 7);
        for candle in candles_from_closes(&closes, 0.02) {
            assert!(candle.is_valid());
        }
    }
}
