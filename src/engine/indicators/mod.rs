//! Technical indicator implementations.
//!
//! Every function is a pure mapping from an ordered candle/price
//! series to an output series. Insufficient history always yields an
//! empty output, never an error; degenerate denominators are floored
//! rather than divided through.

pub mod atr;
pub mod bollinger;
pub mod cci;
pub mod ichimoku;
pub mod macd;
pub mod moving_average;
pub mod obv;
pub mod pivots;
pub mod regression;
pub mod rsi;
pub mod stochastic;
pub mod supertrend;
pub mod vwap;

pub use atr::{atr, true_ranges};
pub use bollinger::{bollinger, BollingerSeries};
pub use cci::cci;
pub use ichimoku::{ichimoku, IchimokuLines};
pub use macd::{macd, MacdSeries};
pub use moving_average::{ema, sma};
pub use obv::obv;
pub use pivots::daily_pivots;
pub use regression::{regression_channel, RegressionChannel};
pub use rsi::rsi;
pub use stochastic::stochastic_k;
pub use supertrend::{supertrend, SupertrendLine};
pub use vwap::vwap;
