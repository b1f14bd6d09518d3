//! Average True Range.

use super::moving_average::sma;
use crate::types::Candle;

/// True range per candle from index 1:
/// `max(high - low, |high - prev_close|, |low - prev_close|)`.
pub fn true_ranges(candles: &[Candle]) -> Vec<f64> {
    if candles.len() < 2 {
        return Vec::new();
    }

    candles
        .windows(2)
        .map(|pair| {
            let prev_close = pair[0].close;
            let c = &pair[1];
            (c.high - c.low)
                .max((c.high - prev_close).abs())
                .max((c.low - prev_close).abs())
        })
        .collect()
}

/// ATR as the SMA of true range over `period`. First output aligns to
/// input index `period` (one candle consumed by the true range, the
/// rest by the SMA window); empty on insufficient history.
pub fn atr(candles: &[Candle], period: usize) -> Vec<f64> {
    sma(&true_ranges(candles), period)
}
