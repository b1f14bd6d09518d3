//! Shared stores and the refresh scheduler.

pub mod chart_store;
pub mod news_store;
pub mod scheduler;
pub mod signal_store;

pub use chart_store::ChartStore;
pub use news_store::NewsStore;
pub use scheduler::RefreshScheduler;
pub use signal_store::SignalStore;
