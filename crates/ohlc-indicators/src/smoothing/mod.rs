//! Smoothing primitives.
//!
//! - SMA (Simple Moving Average)
//! - EMA (Exponential Moving Average)

mod ema;
mod sma;

pub use ema::{ema, EmaConfig};
pub use sma::{sma, SmaConfig};
