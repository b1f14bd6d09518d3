//! Volume-Weighted Average Price.

use crate::types::Candle;

/// Window-relative VWAP: cumulative `sum(TP * volume) / sum(volume)`
/// from the start of the supplied window, not session-anchored. A
/// cumulative volume of zero is substituted with 1 so zero-volume
/// candles never divide by zero. One output per input candle.
pub fn vwap(candles: &[Candle]) -> Vec<f64> {
    let mut cum_pv = 0.0;
    let mut cum_vol = 0.0;

    candles
        .iter()
        .map(|c| {
            cum_pv += c.typical_price() * c.volume;
            cum_vol += c.volume;
            let denominator = if cum_vol == 0.0 { 1.0 } else { cum_vol };
            cum_pv / denominator
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(high: f64, low: f64, close: f64, volume: f64) -> Candle {
        Candle {
            time: 0,
            open: close,
            high,
            low,
            close,
            volume,
        }
    }

    #[test]
    fn test_vwap_empty_input() {
        assert!(vwap(&[]).is_empty());
    }

    #[test]
    fn test_vwap_length_matches_input() {
        let candles: Vec<Candle> = (0..7).map(|_| candle(11.0, 9.0, 10.0, 2.0)).collect();
        assert_eq!(vwap(&candles).len(), 7);
    }

    #[test]
    fn test_vwap_single_candle_is_typical_price() {
        let candles = vec![candle(12.0, 9.0, 10.5, 3.0)];
        let out = vwap(&candles);
        assert!((out[0] - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_vwap_weights_by_volume() {
        // Heavy volume at TP 10, light at TP 20: VWAP stays near 10.
        let candles = vec![
            candle(10.0, 10.0, 10.0, 9.0),
            candle(20.0, 20.0, 20.0, 1.0),
        ];
        let out = vwap(&candles);
        assert!((out[1] - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_vwap_zero_volume_guard() {
        let candles = vec![candle(10.0, 10.0, 10.0, 0.0)];
        let out = vwap(&candles);
        assert!(out[0].is_finite());
        assert!(out[0].abs() < 1e-12);
    }
}
