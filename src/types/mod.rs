//! Shared type definitions.

pub mod candle;
pub mod news;
pub mod prediction;
pub mod signal;

pub use candle::*;
pub use news::*;
pub use prediction::*;
pub use signal::*;
