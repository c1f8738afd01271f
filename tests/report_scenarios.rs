//! End-to-end report tests over generated candle sequences.

mod common;

use approx::assert_relative_eq;
use common::{
    assert_float_eq, candles_from_closes, generate_constant, generate_linear,
    generate_random_walk,
};
use ohlc_core::prelude::*;
use ohlc_indicators::prelude::*;

#[test]
fn rising_market_report() {
    let closes = generate_linear(100.0, 1.0, 250);
    let candles = candles_from_closes(&closes, 0.02);
    assert!(validate_candles(&candles).is_ok());

    let report = analyze_sequence(&candles);

    assert_eq!(report.rsi, 100.0);
    assert_float_eq(report.moving_averages.sma10, 344.5, 1e-12, "sma10");
    assert_float_eq(report.moving_averages.sma200, 249.5, 1e-12, "sma200");

    // SMA(20) now vs five candles ago: 339.5 vs 334.5
    assert_relative_eq!(report.adx, 5.0 / 334.5 * 1000.0, max_relative = 1e-9);

    // Each true range is 1 + 2% of the close; mean close of the last 14 is 342.5
    assert_relative_eq!(report.atr, 1.0 + 0.02 * 342.5, max_relative = 1e-9);

    assert!(report.macd.macd > 0.0);
    assert_eq!(report.macd.histogram, report.macd.macd - report.macd.signal);
    assert!(report.bollinger.lower < report.bollinger.middle);
    assert!(report.non_finite_fields().is_empty());
}

#[test]
fn random_walk_report_stays_in_range() {
    for seed in [1, 42, 12345, 987_654_321] {
        let closes = generate_random_walk(100.0, 2.0, 300, seed);
        let candles = candles_from_closes(&closes, 0.03);
        let report = analyze_sequence(&candles);

        assert!((0.0..=100.0).contains(&report.rsi), "seed {seed}: rsi {}", report.rsi);
        assert!((0.0..=100.0).contains(&report.stochastic.k));
        assert!((0.0..=100.0).contains(&report.stochastic.d));
        assert!((0.0..=100.0).contains(&report.adx));
        assert!(report.atr > 0.0);
        assert!(report.bollinger.lower <= report.bollinger.upper);
        assert!(report.non_finite_fields().is_empty(), "seed {seed}");

        let lo = candles.iter().map(Candle::typical_price).fold(f64::INFINITY, f64::min);
        let hi = candles.iter().map(Candle::typical_price).fold(f64::NEG_INFINITY, f64::max);
        assert!(report.vwap >= lo && report.vwap <= hi);
    }
}

#[test]
fn flat_market_only_cci_is_non_finite() {
    let closes = generate_constant(75.0, 60);
    let candles: Vec<Candle<f64>> = closes.iter().map(|&c| Candle::flat(c)).collect();
    let report = analyze_sequence(&candles);

    assert_eq!(report.non_finite_fields(), vec!["cci"]);
    assert_float_eq(report.cci, f64::NAN, 1e-12, "cci");
    assert_eq!(report.adx, 0.0);
    assert_eq!(report.vwap, 75.0);
}

#[test]
fn custom_config_changes_only_its_indicator() {
    let closes = generate_random_walk(50.0, 1.0, 120, 7);
    let candles = candles_from_closes(&closes, 0.02);

    let mut config = ReportConfig::default();
    config.rsi = RsiConfig::new(7);
    config.bollinger = BollingerConfig::new(10, 1.5);

    let base = analyze_sequence(&candles);
    let custom = analyze_sequence_with(&candles, &config);

    assert_relative_eq!(custom.rsi, rsi(&closes, 7), epsilon = 1e-12);
    assert_eq!(custom.bollinger, bollinger_bands(&closes, 10, 1.5));
    assert_eq!(custom.stochastic, base.stochastic);
    assert_eq!(custom.macd, base.macd);
    assert_eq!(custom.moving_averages, base.moving_averages);
}

#[test]
fn report_config_validation() {
    let config = ReportConfig::default();
    assert!(Indicator::<f64>::validate(&config).is_ok());
    assert_eq!(Indicator::<f64>::min_periods(&config), 200);

    let mut bad = ReportConfig::default();
    bad.atr.period = 0;
    assert_eq!(
        Indicator::<f64>::validate(&bad),
        Err(IndicatorError::InvalidPeriod {
            name: "period",
            value: 0,
        })
    );

    let mut bad = ReportConfig::default();
    bad.stochastic.smooth_d = 0;
    assert!(Indicator::<f64>::validate(&bad).is_err());
}

#[test]
fn report_serializes_nan_as_null() {
    let candles = vec![Candle::flat(10.0_f64); 30];
    let report = analyze_sequence(&candles);
    let json = serde_json::to_value(report).unwrap();

    assert!(json["cci"].is_null());
    assert_eq!(json["rsi"], 100.0);
    assert_eq!(json["moving_averages"]["sma10"], 10.0);
}

#[test]
fn report_json_round_trip() {
    let closes = generate_random_walk(100.0, 1.0, 220, 99);
    let candles = candles_from_closes(&closes, 0.02);
    let report = analyze_sequence(&candles);

    let json = serde_json::to_string(&report).unwrap();
    let back: IndicatorReport<f64> = serde_json::from_str(&json).unwrap();
    assert_float_eq(back.rsi, report.rsi, 1e-12, "rsi");
    assert_float_eq(back.cci, report.cci, 1e-12, "cci");
    assert_float_eq(back.macd.signal, report.macd.signal, 1e-12, "macd.signal");
    assert_float_eq(back.vwap, report.vwap, 1e-12, "vwap");
    assert_float_eq(back.moving_averages.sma200, report.moving_averages.sma200, 1e-12, "sma200");
}
