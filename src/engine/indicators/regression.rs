//! Linear regression channel.

/// Regression channel as parallel vectors of equal length, one output
/// per input value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegressionChannel {
    pub middle: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
    pub slope: f64,
}

/// Ordinary least squares of close against positional index, with the
/// channel at the fitted line +/- 2 population standard deviations of
/// the residuals. Requires at least two points, else empty. The slope
/// denominator is floored at 1 against degenerate sums.
pub fn regression_channel(closes: &[f64]) -> RegressionChannel {
    let n = closes.len();
    if n < 2 {
        return RegressionChannel::default();
    }

    let nf = n as f64;
    let sum_x: f64 = (0..n).map(|i| i as f64).sum();
    let sum_y: f64 = closes.iter().sum();
    let sum_xy: f64 = closes.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
    let sum_x2: f64 = (0..n).map(|i| (i as f64).powi(2)).sum();

    let denominator = nf * sum_x2 - sum_x * sum_x;
    let denominator = if denominator == 0.0 { 1.0 } else { denominator };
    let slope = (nf * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / nf;

    let middle: Vec<f64> = (0..n).map(|i| slope * i as f64 + intercept).collect();

    let variance = closes
        .iter()
        .zip(&middle)
        .map(|(y, fit)| (y - fit).powi(2))
        .sum::<f64>()
        / nf;
    let band = 2.0 * variance.sqrt();

    RegressionChannel {
        upper: middle.iter().map(|v| v + band).collect(),
        lower: middle.iter().map(|v| v - band).collect(),
        middle,
        slope,
    }
}
