//! Volatility indicators.
//!
//! - Bollinger Bands
//! - ATR (Average True Range)

mod atr;
mod bollinger;

pub use atr::{atr, true_ranges, AtrConfig};
pub use bollinger::{bollinger_bands, BollingerConfig, BollingerOutput};
