//! MACD (Moving Average Convergence Divergence).

use super::moving_average::ema;

/// MACD series: macd line, signal line and histogram as parallel
/// vectors of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Compute MACD over a close series.
///
/// The macd line is `EMA(fast) - EMA(slow)` aligned to the shorter
/// slow series; the signal line is an EMA of the macd line; the
/// histogram is `macd - signal` with the macd line trimmed from the
/// left to match. All three returned vectors share the alignment
/// offset `slow + signal_period - 2`. Empty when history is
/// insufficient.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal_period: usize) -> MacdSeries {
    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);

    if fast_ema.is_empty() || slow_ema.is_empty() {
        return MacdSeries::default();
    }

    // Align on the tail: the slow EMA starts later, so drop the extra
    // leading fast-EMA values.
    let len = fast_ema.len().min(slow_ema.len());
    let fast_skip = fast_ema.len() - len;
    let slow_skip = slow_ema.len() - len;
    let macd_line: Vec<f64> = fast_ema[fast_skip..]
        .iter()
        .zip(&slow_ema[slow_skip..])
        .map(|(f, s)| f - s)
        .collect();

    let signal_line = ema(&macd_line, signal_period);
    if signal_line.is_empty() {
        return MacdSeries::default();
    }

    let trim = macd_line.len() - signal_line.len();
    let macd_trimmed = macd_line[trim..].to_vec();
    let histogram: Vec<f64> = macd_trimmed
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| m - s)
        .collect();

    MacdSeries {
        macd: macd_trimmed,
        signal: signal_line,
        histogram,
    }
}
