//! Alignment between indicator outputs and their input candles.
//!
//! Every indicator emits a series shorter than its input by a
//! deterministic lookback: `output[i]` corresponds to
//! `input[i + offset]`. Callers plotting or voting on two indicators
//! jointly must resolve each offset separately; equal-length alignment
//! is never assumed.

use crate::types::{Candle, IndicatorPoint};

/// Offset of an SMA, EMA, Bollinger middle band, Stochastic %K or CCI
/// output: the first window consumes `period` candles.
pub fn window_offset(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Offset of a Wilder RSI output. The seed consumes `period` deltas,
/// which need `period + 1` candles, so the first value lands on input
/// index `period`.
pub fn rsi_offset(period: usize) -> usize {
    period
}

/// Offset of an ATR output. True range consumes one candle, the SMA
/// over true ranges another `period - 1`.
pub fn atr_offset(period: usize) -> usize {
    period
}

/// Offset of the MACD/signal/histogram triple after the left-trim that
/// aligns all three series: `slow + signal - 2`.
pub fn macd_offset(slow_period: usize, signal_period: usize) -> usize {
    slow_period + signal_period - 2
}

/// Offset of a Supertrend line: the ATR seed consumes `atr_period`
/// candles.
pub fn supertrend_offset(atr_period: usize) -> usize {
    atr_period
}

/// Stamp candle timestamps onto raw output values, starting at
/// `offset`. Panics are avoided by truncating to whatever candles
/// remain; with a correct offset the lengths match exactly.
pub fn attach_times(candles: &[Candle], values: Vec<f64>, offset: usize) -> Vec<IndicatorPoint> {
    candles
        .iter()
        .skip(offset)
        .zip(values)
        .map(|(candle, value)| IndicatorPoint {
            time: candle.time,
            value,
        })
        .collect()
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
                volume: 10.0,
            })
            .collect()
    }

    #[test]
    fn test_window_offset() {
        assert_eq!(window_offset(20), 19);
        assert_eq!(window_offset(1), 0);
        assert_eq!(window_offset(0), 0);
    }

    #[test]
    fn test_macd_offset() {
        // Default 12/26/9 parameters leave 33 leading candles unserved.
        assert_eq!(macd_offset(26, 9), 33);
    }

    #[test]
    fn test_attach_times_alignment() {
        let input = candles(10);
        let points = attach_times(&input, vec![1.0; 7], 3);
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].time, input[3].time);
        assert_eq!(points[6].time, input[9].time);
    }

    #[test]
    fn test_attach_times_truncates_excess() {
        let input = candles(5);
        let points = attach_times(&input, vec![1.0; 10], 2);
        assert_eq!(points.len(), 3);
    }
}
