//! # ohlc-indicators
//!
//! Technical indicators for the ohlc-ta engine.
//!
//! Every indicator is a pure function of an ordered candle (or close) slice
//! and its parameters. None of them can fail: short input yields a documented
//! fallback value instead of an error.
//!
//! - **Smoothing**: SMA, EMA
//! - **Momentum**: RSI, Stochastic, CCI
//! - **Trend**: MACD, simplified ADX
//! - **Volatility**: Bollinger Bands, ATR
//! - **Volume**: VWAP
//! - **Report**: [`analyze_sequence`] bundles all of the above
//!
//! # Example
//!
//! ```
//! use ohlc_core::prelude::*;
//! use ohlc_indicators::prelude::*;
//!
//! let candles: Vec<Candle<f64>> = (0..60)
//!     .map(|i| {
//!         let close = 100.0 + i as f64;
//!         Candle::new(close - 0.5, close + 1.0, close - 1.0, close).with_volume(1_000.0)
//!     })
//!     .collect();
//!
//! let report = analyze_sequence(&candles);
//! assert_eq!(report.rsi, 100.0);
//! assert!(report.macd.macd > 0.0);
//!
//! // Individual indicators are plain functions too.
//! assert_eq!(rsi(&closes(&candles), 14), report.rsi);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod momentum;
pub mod report;
pub mod smoothing;
pub mod trend;
pub mod volatility;
pub mod volume;

pub mod prelude;

pub use prelude::*;
