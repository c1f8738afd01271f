//! Trend indicators.
//!
//! - MACD (Moving Average Convergence Divergence)
//! - ADX-style trend strength estimate

mod adx;
mod macd;

pub use adx::{adx, adx_with, AdxConfig};
pub use macd::{macd, macd_with, MacdConfig, MacdOutput};
