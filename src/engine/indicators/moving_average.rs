//! Simple and exponential moving averages.

/// Simple moving average: arithmetic mean of each contiguous window of
/// `period` values. Output length is `n - period + 1`; output `i`
/// aligns to input `i + period - 1`. Returns an empty vector when
/// history is insufficient.
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(values.len() - period + 1);
    let mut sum: f64 = values[..period].iter().sum();
    out.push(sum / period as f64);

    for i in period..values.len() {
        sum += values[i] - values[i - period];
        out.push(sum / period as f64);
    }

    out
}

/// Exponential moving average seeded with the SMA of the first
/// `period` values, then `ema[t] = value[t] * k + ema[t-1] * (1 - k)`
/// with `k = 2 / (period + 1)`. Same length and alignment as `sma`.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let k = 2.0 / (period as f64 + 1.0);
    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;

    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(seed);

    let mut current = seed;
    for &value in &values[period..] {
        current = value * k + current * (1.0 - k);
        out.push(current);
    }

    out
}
