//! Candle window storage.

use crate::types::{Candle, Timeframe};
use dashmap::DashMap;
use std::sync::Arc;

/// Latest fetched candle window per (pair, timeframe).
///
/// Windows are replaced wholesale on every refresh; readers get a
/// clone of the full window. Keys are disjoint per timeframe, so
/// concurrent refreshes never contend on the same entry.
pub struct ChartStore {
    /// Key format: "{PAIR}:{timeframe}".
    windows: DashMap<String, Vec<Candle>>,
}

impl ChartStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            windows: DashMap::new(),
        })
    }

    fn key(pair: &str, timeframe: Timeframe) -> String {
        format!("{}:{}", pair.to_uppercase(), timeframe.as_str())
    }

    /// Replace the window for one (pair, timeframe).
    pub fn replace(&self, pair: &str, timeframe: Timeframe, candles: Vec<Candle>) {
        self.windows.insert(Self::key(pair, timeframe), candles);
    }

    /// Get a copy of the current window, empty when never fetched.
    pub fn window(&self, pair: &str, timeframe: Timeframe) -> Vec<Candle> {
        self.windows
            .get(&Self::key(pair, timeframe))
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }

}

impl Default for ChartStore {
    fn default() -> Self {
        Self {
            windows: DashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candles(n: usize) -> Vec<Candle> {
        (0..n)
            .map(|i| Candle {
                time: 1_000 + i as i64 * 60,
                open: 1.0,
                high: 2.0,
                low: 0.5,
                close: 1.5,
                volume: 3.0,
            })
            .collect()
    }

    #[test]
    fn test_window_empty_when_unfetched() {
        let store = ChartStore::new();
        assert!(store.window("BTCUSDT", Timeframe::OneMinute).is_empty());
    }

    #[test]
    fn test_replace_and_read() {
        let store = ChartStore::new();
        store.replace("BTCUSDT", Timeframe::OneMinute, candles(10));
        assert_eq!(store.window("BTCUSDT", Timeframe::OneMinute).len(), 10);
        // Other timeframes stay independent.
        assert!(store.window("BTCUSDT", Timeframe::OneHour).is_empty());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let store = ChartStore::new();
        store.replace("BTCUSDT", Timeframe::OneMinute, candles(10));
        store.replace("BTCUSDT", Timeframe::OneMinute, candles(3));
        assert_eq!(store.window("BTCUSDT", Timeframe::OneMinute).len(), 3);
    }

    #[test]
    fn test_pair_key_case_insensitive() {
        let store = ChartStore::new();
        store.replace("btcusdt", Timeframe::OneMinute, candles(5));
        assert_eq!(store.window("BTCUSDT", Timeframe::OneMinute).len(), 5);
        assert_eq!(store.window("btcUsdt", Timeframe::OneMinute).len(), 5);
    }
}
