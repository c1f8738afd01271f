//! # ohlc-core
//!
//! Core types and traits for the ohlc-ta indicator engine.
//!
//! - [`TaFloat`] - Trait for numeric types (f32/f64)
//! - [`Candle`] - One OHLCV sample with optional volume
//! - [`Indicator`] - Pure indicator computation trait
//! - [`IndicatorError`] - Configuration and candle validation errors
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use ohlc_core::prelude::*;
//!
//! let candles: Vec<Candle<f64>> = vec![
//!     Candle::new(100.0, 101.0, 99.0, 100.5),
//!     Candle::new(100.5, 102.0, 100.0, 101.5),
//! ];
//! let closes = closes(&candles);
//! assert_eq!(mean(&closes), 101.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod candle;
pub mod error;
pub mod num;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export core types at crate root
pub use candle::Candle;
pub use error::{IndicatorError, Result};
pub use num::TaFloat;
pub use traits::{Indicator, IndicatorConfig};
