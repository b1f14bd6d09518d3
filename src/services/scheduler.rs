//! Per-timeframe refresh scheduling.

use crate::engine;
use crate::services::{ChartStore, SignalStore};
use crate::sources::KlineClient;
use crate::types::Timeframe;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Drives periodic recomputation for every (pair, timeframe).
///
/// Each timeframe runs on its own independent interval task; there is
/// no ordering between timeframes and no shared mutable state beyond
/// the keyed stores, whose entries are disjoint per key. One refresh
/// cycle is a synchronous pipeline: fetch, compute all indicators,
/// vote, publish. `refresh_pair` is the whole cycle body and can be
/// driven directly, without timers, in tests.
pub struct RefreshScheduler {
    klines: KlineClient,
    charts: Arc<ChartStore>,
    signals: Arc<SignalStore>,
    pairs: Vec<String>,
    kline_limit: usize,
}

impl RefreshScheduler {
    pub fn new(
        klines: KlineClient,
        charts: Arc<ChartStore>,
        signals: Arc<SignalStore>,
        pairs: Vec<String>,
        kline_limit: usize,
    ) -> Arc<Self> {
        Arc::new(Self {
            klines,
            charts,
            signals,
            pairs,
            kline_limit,
        })
    }

    /// Spawn one refresh loop per timeframe.
    pub fn spawn(self: &Arc<Self>) {
        for timeframe in Timeframe::ALL {
            let scheduler = Arc::clone(self);
            tokio::spawn(async move {
                info!(
                    "Starting {} refresh loop ({}s cadence)",
                    timeframe.as_str(),
                    timeframe.refresh_interval().as_secs()
                );
                let mut ticker = tokio::time::interval(timeframe.refresh_interval());
                loop {
                    ticker.tick().await;
                    scheduler.refresh_timeframe(timeframe).await;
                }
            });
        }
    }

    /// Refresh every configured pair for one timeframe.
    pub async fn refresh_timeframe(&self, timeframe: Timeframe) {
        for pair in &self.pairs {
            self.refresh_pair(pair, timeframe).await;
        }
    }

    /// One full refresh cycle for one (pair, timeframe).
    ///
    /// On any failure the previous published signal stays visible;
    /// a first-ever failure publishes the neutral value instead.
    pub async fn refresh_pair(&self, pair: &str, timeframe: Timeframe) {
        match self
            .klines
            .fetch_klines(pair, timeframe, self.kline_limit)
            .await
        {
            Ok(candles) if !candles.is_empty() => {
                let signal = engine::compute_signal(&candles, self.signals.weights());
                debug!(
                    "{} {} -> {} ({}%)",
                    pair,
                    timeframe.as_str(),
                    signal.forecast.label(),
                    signal.confidence
                );
                self.charts.replace(pair, timeframe, candles);
                self.signals.publish(pair, timeframe, signal);
            }
            Ok(_) => {
                warn!("No candles for {} {}", pair, timeframe.as_str());
                self.signals.mark_failed(pair, timeframe);
            }
            Err(e) => {
                error!(
                    "Refresh failed for {} {}: {}",
                    pair,
                    timeframe.as_str(),
                    e
                );
                self.signals.mark_failed(pair, timeframe);
            }
        }
    }
}
