//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use ohlc_core::prelude::*;
//!
//! let candle: Candle<f64> = Candle::new(100.0, 105.0, 98.0, 103.0);
//! assert!(validate_candles(&[candle]).is_ok());
//! ```

// Core types
pub use crate::candle::{closes, typical_prices, validate_candles, Candle};
pub use crate::num::TaFloat;

// Error types
pub use crate::error::{IndicatorError, Result};

// Traits
pub use crate::traits::{Indicator, IndicatorConfig};

// Utility functions
pub use crate::utils::{highest, lowest, mean, mean_abs_deviation, population_std, trailing};
