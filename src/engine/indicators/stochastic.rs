//! Stochastic oscillator %K.

use crate::types::Candle;

/// %K over each trailing window of `period` candles:
/// `(close - lowest_low) / (highest_high - lowest_low) * 100`.
///
/// A degenerate window where the highest high equals the lowest low
/// yields 50.0, the midpoint of the range. Output aligns to input
/// index `i + period - 1`; empty on insufficient history.
pub fn stochastic_k(candles: &[Candle], period: usize) -> Vec<f64> {
    if period == 0 || candles.len() < period {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(candles.len() - period + 1);
    for i in (period - 1)..candles.len() {
        let window = &candles[(i + 1 - period)..=i];
        let lowest = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
        let highest = window
            .iter()
            .map(|c| c.high)
            .fold(f64::NEG_INFINITY, f64::max);

        let k = if highest > lowest {
            (candles[i].close - lowest) / (highest - lowest) * 100.0
        } else {
            50.0
        };
        out.push(k);
    }

    out
}
