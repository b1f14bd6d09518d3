//! Published signal storage.

use crate::engine::{master_signal, VoteWeights};
use crate::types::{MasterSignal, PairSignals, Timeframe, TimeframeEntry, TimeframeSignal};
use dashmap::DashMap;
use std::sync::Arc;

/// Published `TimeframeSignal` per (pair, timeframe).
///
/// A refresh publishes its result as one insert, so consumers see
/// either the previous whole signal or the new whole signal, never a
/// partial update. On a failed refresh the previous signal stays
/// visible; the neutral value is published only when nothing was ever
/// published for the key.
pub struct SignalStore {
    /// Key format: "{PAIR}:{timeframe}".
    signals: DashMap<String, TimeframeSignal>,
    weights: VoteWeights,
}

impl SignalStore {
    pub fn new(weights: VoteWeights) -> Arc<Self> {
        Arc::new(Self {
            signals: DashMap::new(),
            weights,
        })
    }

    fn key(pair: &str, timeframe: Timeframe) -> String {
        format!("{}:{}", pair.to_uppercase(), timeframe.as_str())
    }

    /// Vote weights used by refresh cycles.
    pub fn weights(&self) -> &VoteWeights {
        &self.weights
    }

    /// Publish a freshly computed signal.
    pub fn publish(&self, pair: &str, timeframe: Timeframe, signal: TimeframeSignal) {
        self.signals.insert(Self::key(pair, timeframe), signal);
    }

    /// Record a failed refresh cycle: keep the previous signal, or
    /// publish the defined neutral value on first failure.
    pub fn mark_failed(&self, pair: &str, timeframe: Timeframe) {
        self.signals
            .entry(Self::key(pair, timeframe))
            .or_insert_with(TimeframeSignal::neutral);
    }

    /// Current signal for one (pair, timeframe), if ever published.
    pub fn get(&self, pair: &str, timeframe: Timeframe) -> Option<TimeframeSignal> {
        self.signals
            .get(&Self::key(pair, timeframe))
            .map(|entry| *entry)
    }

    /// Master signal over all published timeframes for the pair,
    /// recomputed on demand.
    pub fn master(&self, pair: &str) -> MasterSignal {
        let signals: Vec<TimeframeSignal> = Timeframe::ALL
            .iter()
            .filter_map(|tf| self.get(pair, *tf))
            .collect();
        master_signal(&signals)
    }

    /// Full per-timeframe picture plus master for one pair, or `None`
    /// when nothing was ever published.
    pub fn pair_signals(&self, pair: &str) -> Option<PairSignals> {
        let timeframes: Vec<TimeframeEntry> = Timeframe::ALL
            .iter()
            .filter_map(|tf| {
                self.get(pair, *tf).map(|signal| TimeframeEntry {
                    timeframe: *tf,
                    forecast: signal.forecast,
                    confidence: signal.confidence,
                })
            })
            .collect();

        if timeframes.is_empty() {
            return None;
        }

        Some(PairSignals {
            pair: pair.to_uppercase(),
            master: self.master(pair),
            timeframes,
            timestamp: chrono::Utc::now().timestamp_millis(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Forecast;

    fn signal(forecast: Forecast, confidence: u8) -> TimeframeSignal {
        TimeframeSignal {
            forecast,
            confidence,
        }
    }

    #[test]
    fn test_get_unpublished_is_none() {
        let store = SignalStore::new(VoteWeights::default());
        assert!(store.get("BTCUSDT", Timeframe::OneMinute).is_none());
    }

    #[test]
    fn test_publish_and_get() {
        let store = SignalStore::new(VoteWeights::default());
        store.publish("BTCUSDT", Timeframe::OneMinute, signal(Forecast::Buy, 75));
        let got = store.get("btcusdt", Timeframe::OneMinute).unwrap();
        assert_eq!(got.forecast, Forecast::Buy);
        assert_eq!(got.confidence, 75);
    }

    #[test]
    fn test_mark_failed_keeps_previous() {
        let store = SignalStore::new(VoteWeights::default());
        store.publish("BTCUSDT", Timeframe::OneHour, signal(Forecast::Sell, 60));
        store.mark_failed("BTCUSDT", Timeframe::OneHour);
        let got = store.get("BTCUSDT", Timeframe::OneHour).unwrap();
        assert_eq!(got.forecast, Forecast::Sell);
        assert_eq!(got.confidence, 60);
    }

    #[test]
    fn test_mark_failed_first_failure_is_neutral() {
        let store = SignalStore::new(VoteWeights::default());
        store.mark_failed("BTCUSDT", Timeframe::OneHour);
        assert_eq!(
            store.get("BTCUSDT", Timeframe::OneHour).unwrap(),
            TimeframeSignal::neutral()
        );
    }

    #[test]
    fn test_master_over_published_timeframes() {
        let store = SignalStore::new(VoteWeights::default());
        store.publish("BTCUSDT", Timeframe::OneMinute, signal(Forecast::Buy, 80));
        store.publish("BTCUSDT", Timeframe::FiveMinutes, signal(Forecast::Sell, 20));
        let master = store.master("BTCUSDT");
        assert_eq!(master.forecast, Forecast::Buy);
        assert_eq!(master.confidence, 80); // 80 / 100
    }

    #[test]
    fn test_pair_signals_none_when_empty() {
        let store = SignalStore::new(VoteWeights::default());
        assert!(store.pair_signals("BTCUSDT").is_none());
    }

    #[test]
    fn test_pair_signals_assembled() {
        let store = SignalStore::new(VoteWeights::default());
        store.publish("btcusdt", Timeframe::OneMinute, signal(Forecast::Buy, 50));
        store.publish("btcusdt", Timeframe::OneHour, signal(Forecast::Flat, 0));
        let pair = store.pair_signals("BTCUSDT").unwrap();
        assert_eq!(pair.pair, "BTCUSDT");
        assert_eq!(pair.timeframes.len(), 2);
        assert_eq!(pair.master.forecast, Forecast::Buy);
        assert_eq!(pair.master.confidence, 100);
    }
}
