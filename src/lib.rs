//! Vantage - Multi-timeframe trading signal engine and forecast server

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use config::Config;
use services::{ChartStore, NewsStore, SignalStore};
use sources::PredictionClient;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub charts: Arc<ChartStore>,
    pub signals: Arc<SignalStore>,
    pub news: Arc<NewsStore>,
    pub predictions: Option<Arc<PredictionClient>>,
}
