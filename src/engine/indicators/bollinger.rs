//! Bollinger Bands.

use super::moving_average::sma;

/// Bollinger Bands as parallel vectors of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BollingerSeries {
    pub middle: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Middle band = SMA(period); upper/lower = middle +/- `mult` times
/// the population standard deviation of the same window. Output
/// aligns to input index `i + period - 1`; empty on insufficient
/// history.
pub fn bollinger(closes: &[f64], period: usize, mult: f64) -> BollingerSeries {
    let middle = sma(closes, period);
    if middle.is_empty() {
        return BollingerSeries::default();
    }

    let mut upper = Vec::with_capacity(middle.len());
    let mut lower = Vec::with_capacity(middle.len());

    for (i, &mean) in middle.iter().enumerate() {
        let window = &closes[i..i + period];
        let variance =
            window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
        let band = mult * variance.sqrt();
        upper.push(mean + band);
        lower.push(mean - band);
    }

    BollingerSeries { middle, upper, lower }
}
