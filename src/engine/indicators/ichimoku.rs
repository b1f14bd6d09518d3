//! Ichimoku components.

use crate::types::Candle;

/// Raw Ichimoku output. Each vector carries the alignment offset of
/// its own window: Tenkan `tenkan_period - 1`, Kijun and Span A
/// `kijun_period - 1`, Span B `span_b_period - 1`. `displacement` is
/// the conventional forward plot shift for the spans; it is display
/// metadata only and never affects the computed values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IchimokuLines {
    pub tenkan: Vec<f64>,
    pub kijun: Vec<f64>,
    pub span_a: Vec<f64>,
    pub span_b: Vec<f64>,
    pub displacement: usize,
}

/// Midpoint of the highest high and lowest low over each trailing
/// window of `period` candles.
fn period_midpoints(candles: &[Candle], period: usize) -> Vec<f64> {
    if period == 0 || candles.len() < period {
        return Vec::new();
    }

    (period - 1..candles.len())
        .map(|i| {
            let window = &candles[(i + 1 - period)..=i];
            let high = window
                .iter()
                .map(|c| c.high)
                .fold(f64::NEG_INFINITY, f64::max);
            let low = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
            (high + low) / 2.0
        })
        .collect()
}

/// Ichimoku with the classic 9/26/52 windows.
///
/// Span A is the midpoint of Tenkan and Kijun, aligned to the shorter
/// Kijun series; Span B is the 52-period midpoint. Components with
/// insufficient history come back empty independently of each other.
pub fn ichimoku(
    candles: &[Candle],
    tenkan_period: usize,
    kijun_period: usize,
    span_b_period: usize,
) -> IchimokuLines {
    let tenkan = period_midpoints(candles, tenkan_period);
    let kijun = period_midpoints(candles, kijun_period);
    let span_b = period_midpoints(candles, span_b_period);

    // Tenkan starts earlier; trim its head so both series cover the
    // same candles.
    let skip = tenkan.len().saturating_sub(kijun.len());
    let span_a: Vec<f64> = tenkan[skip..]
        .iter()
        .zip(&kijun)
        .map(|(t, k)| (t + k) / 2.0)
        .collect();

    IchimokuLines {
        tenkan,
        kijun,
        span_a,
        span_b,
        displacement: kijun_period,
    }
}
