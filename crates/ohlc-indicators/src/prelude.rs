//! Prelude for ohlc-indicators.
//!
//! This module re-exports all indicator functions, configurations and outputs.

// Smoothing primitives
pub use crate::smoothing::{ema, sma, EmaConfig, SmaConfig};

// Momentum indicators
pub use crate::momentum::{
    cci, rsi, stochastic, CciConfig, RsiConfig, StochasticConfig, StochasticOutput, CCI_CONSTANT,
};

// Trend indicators
pub use crate::trend::{adx, adx_with, macd, macd_with, AdxConfig, MacdConfig, MacdOutput};

// Volatility indicators
pub use crate::volatility::{
    atr, bollinger_bands, true_ranges, AtrConfig, BollingerConfig, BollingerOutput,
};

// Volume indicators
pub use crate::volume::{vwap, VwapConfig};

// Report
pub use crate::report::{
    analyze_sequence, analyze_sequence_with, IndicatorReport, MovingAverages,
    ReportConfig,
};
