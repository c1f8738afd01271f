//! Volume indicators.
//!
//! - VWAP (Volume Weighted Average Price)

mod vwap;

pub use vwap::{vwap, VwapConfig};
