//! Relative Strength Index, Wilder's method.

/// Wilder RSI over a close series.
///
/// The seed average gain/loss comes from the first `period` deltas;
/// subsequent values use the smoothing recurrence
/// `avg = (avg * (period - 1) + current) / period`. A zero average
/// loss is substituted with 1 so RS never divides by exact zero.
/// First output aligns to input index `period`; requires
/// `n > period`, else empty.
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || closes.len() <= period {
        return Vec::new();
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let delta = closes[i] - closes[i - 1];
        if delta >= 0.0 {
            avg_gain += delta;
        } else {
            avg_loss += -delta;
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;

    let mut out = Vec::with_capacity(closes.len() - period);
    out.push(rsi_value(avg_gain, avg_loss));

    for i in (period + 1)..closes.len() {
        let delta = closes[i] - closes[i - 1];
        let (gain, loss) = if delta > 0.0 { (delta, 0.0) } else { (0.0, -delta) };
        avg_gain = (avg_gain * (period - 1) as f64 + gain) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + loss) / period as f64;
        out.push(rsi_value(avg_gain, avg_loss));
    }

    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    let denominator = if avg_loss == 0.0 { 1.0 } else { avg_loss };
    let rs = avg_gain / denominator;
    100.0 - 100.0 / (1.0 + rs)
}
