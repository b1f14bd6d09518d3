//! Upstream data source clients.

pub mod binance;
pub mod news;
pub mod predictions;

pub use binance::KlineClient;
pub use news::NewsClient;
pub use predictions::PredictionClient;
