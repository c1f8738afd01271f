//! Momentum indicators.
//!
//! - RSI (Relative Strength Index)
//! - Stochastic Oscillator
//! - CCI (Commodity Channel Index)

mod cci;
mod rsi;
mod stochastic;

pub use cci::{cci, CciConfig, CCI_CONSTANT};
pub use rsi::{rsi, RsiConfig};
pub use stochastic::{stochastic, StochasticConfig, StochasticOutput};
