//! Commodity Channel Index.

use super::moving_average::sma;
use crate::types::Candle;

/// CCI over typical prices:
/// `(TP - SMA(TP)) / (0.015 * mean_absolute_deviation)`.
///
/// A zero mean deviation is substituted with 1 so flat windows never
/// divide by zero. Output aligns to input index `i + period - 1`;
/// empty on insufficient history.
pub fn cci(candles: &[Candle], period: usize) -> Vec<f64> {
    if period == 0 || candles.len() < period {
        return Vec::new();
    }

    let typical: Vec<f64> = candles.iter().map(Candle::typical_price).collect();
    let means = sma(&typical, period);

    let mut out = Vec::with_capacity(means.len());
    for (i, &mean) in means.iter().enumerate() {
        let window = &typical[i..i + period];
        let mean_dev =
            window.iter().map(|v| (v - mean).abs()).sum::<f64>() / period as f64;
        let mean_dev = if mean_dev == 0.0 { 1.0 } else { mean_dev };
        out.push((typical[i + period - 1] - mean) / (0.015 * mean_dev));
    }

    out
}
