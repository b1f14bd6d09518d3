//! Supertrend.

use super::atr::atr;
use crate::types::{Candle, TrendDirection};

/// Raw Supertrend output: the plotted line plus the trend state after
/// the last candle. The line aligns to input index `i + atr_period`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupertrendLine {
    pub line: Vec<f64>,
    pub trend: Option<TrendDirection>,
}

/// Supertrend over `(high + low) / 2` midpoints with ATR bands.
///
/// Basic bands are `midpoint +/- mult * ATR`. Final bands ratchet
/// monotonically toward price: the upper band only moves down unless
/// price closes above it, the lower band only moves up unless price
/// closes below it. The plotted line follows whichever band price is
/// testing; the binary trend state flips only on a close through the
/// opposite band.
pub fn supertrend(candles: &[Candle], atr_period: usize, mult: f64) -> SupertrendLine {
    let atr_values = atr(candles, atr_period);
    if atr_values.is_empty() {
        return SupertrendLine::default();
    }

    let midpoints: Vec<f64> = candles[atr_period..]
        .iter()
        .map(|c| (c.high + c.low) / 2.0)
        .collect();

    let len = atr_values.len().min(midpoints.len());
    let mut final_upper = Vec::with_capacity(len);
    let mut final_lower = Vec::with_capacity(len);

    for i in 0..len {
        let basic_upper = midpoints[i] + mult * atr_values[i];
        let basic_lower = midpoints[i] - mult * atr_values[i];

        if i == 0 {
            final_upper.push(basic_upper);
            final_lower.push(basic_lower);
            continue;
        }

        let close = candles[i + atr_period].close;
        let prev_upper = final_upper[i - 1];
        let prev_lower = final_lower[i - 1];

        final_upper.push(if basic_upper < prev_upper || close > prev_upper {
            basic_upper
        } else {
            prev_upper
        });
        final_lower.push(if basic_lower > prev_lower || close < prev_lower {
            basic_lower
        } else {
            prev_lower
        });
    }

    let mut line = Vec::with_capacity(len);
    let mut trend = TrendDirection::Up;
    for i in 0..len {
        let close = candles[i + atr_period].close;
        if close <= final_upper[i] {
            if close < final_upper[i] {
                trend = TrendDirection::Down;
            }
            line.push(final_upper[i]);
        } else {
            if close > final_lower[i] {
                trend = TrendDirection::Up;
            }
            line.push(final_lower[i]);
        }
    }

    SupertrendLine {
        line,
        trend: Some(trend),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(high: f64, low: f64, close: f64) -> Candle {
        Candle {
            time: 0,
            open: close,
            high,
            low,
            close,
            volume: 1.0,
        }
    }

    #[test]
    fn test_supertrend_insufficient_data() {
        let candles: Vec<Candle> = (0..10).map(|_| candle(2.0, 1.0, 1.5)).collect();
        let out = supertrend(&candles, 10, 3.0);
        assert!(out.line.is_empty());
        assert!(out.trend.is_none());
    }

    #[test]
    fn test_supertrend_length_and_alignment() {
        let candles: Vec<Candle> = (0..60)
            .map(|i| {
                let base = 100.0 + i as f64 * 0.2;
                candle(base + 1.0, base - 1.0, base)
            })
            .collect();
        let out = supertrend(&candles, 10, 3.0);
        assert_eq!(out.line.len(), 60 - 10);
    }

    #[test]
    fn test_supertrend_downtrend_rides_upper_band() {
        let candles: Vec<Candle> = (0..40)
            .map(|i| {
                let base = 200.0 - i as f64 * 2.0;
                candle(base + 1.0, base - 1.0, base)
            })
            .collect();
        let out = supertrend(&candles, 10, 3.0);
        assert_eq!(out.trend, Some(TrendDirection::Down));
        // In a steady downtrend the line sits above price.
        let last_close = candles.last().unwrap().close;
        assert!(*out.line.last().unwrap() > last_close);
    }

    #[test]
    fn test_supertrend_upper_band_ratchets_down() {
        let candles: Vec<Candle> = (0..40)
            .map(|i| {
                let base = 200.0 - i as f64 * 2.0;
                candle(base + 1.0, base - 1.0, base)
            })
            .collect();
        let out = supertrend(&candles, 10, 3.0);
        // Sustained downtrend without closes above the band: the
        // plotted upper band never increases.
        for pair in out.line.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-9);
        }
    }
}
