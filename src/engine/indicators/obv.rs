//! On-Balance Volume.

use crate::types::Candle;

/// Cumulative OBV starting at 0: add volume on a rising close,
/// subtract on a falling close, carry on a tie. One output per input
/// candle, no lookback.
pub fn obv(candles: &[Candle]) -> Vec<f64> {
    if candles.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(candles.len());
    let mut total = 0.0;
    out.push(total);

    for pair in candles.windows(2) {
        if pair[1].close > pair[0].close {
            total += pair[1].volume;
        } else if pair[1].close < pair[0].close {
            total -= pair[1].volume;
        }
        out.push(total);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(close: f64, volume: f64) -> Candle {
        Candle {
            time: 0,
            open: close,
            high: close,
            low: close,
            close,
            volume,
        }
    }

    #[test]
    fn test_obv_empty_input() {
        assert!(obv(&[]).is_empty());
    }

    #[test]
    fn test_obv_length_matches_input() {
        let candles: Vec<Candle> = (0..10).map(|i| candle(100.0 + i as f64, 5.0)).collect();
        assert_eq!(obv(&candles).len(), 10);
    }

    #[test]
    fn test_obv_starts_at_zero() {
        let candles = vec![candle(100.0, 50.0)];
        assert_eq!(obv(&candles), vec![0.0]);
    }

    #[test]
    fn test_obv_monotonic_on_rising_closes() {
        let candles: Vec<Candle> = (0..10).map(|i| candle(100.0 + i as f64, 5.0)).collect();
        let out = obv(&candles);
        for pair in out.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!((out[9] - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_obv_monotonic_on_falling_closes() {
        let candles: Vec<Candle> = (0..10).map(|i| candle(100.0 - i as f64, 5.0)).collect();
        let out = obv(&candles);
        for pair in out.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn test_obv_unchanged_on_tie() {
        let candles = vec![candle(100.0, 10.0), candle(100.0, 10.0)];
        assert_eq!(obv(&candles), vec![0.0, 0.0]);
    }
}
