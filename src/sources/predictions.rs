//! External prediction service client.
//!
//! The prediction backend serves alternate model forecasts (Prophet,
//! XGBoost, LSTM, ensemble). They are displayed alongside the
//! indicator-vote signals but never participate in the vote.

use crate::types::{PredictionModel, PredictionResponse, PredictionView, TrendLabel};
use reqwest::Client;

/// Client for the prediction backend.
#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .user_agent("Vantage/1.0")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }

    /// Fetch a forecast for (symbol, model) and attach the slope
    /// trend classification.
    pub async fn fetch(
        &self,
        symbol: &str,
        model: PredictionModel,
    ) -> anyhow::Result<PredictionView> {
        let url = format!(
            "{}/predict/{}?symbol={}",
            self.base_url,
            model.as_str(),
            symbol
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("prediction service error: {}", response.status());
        }

        let payload: PredictionResponse = response.json().await?;
        let path: Vec<f64> = payload.predictions.iter().map(|p| p.yhat).collect();
        let (trend, slope) = slope_trend(&path);

        Ok(PredictionView {
            symbol: symbol.to_uppercase(),
            model,
            predictions: payload.predictions,
            confidence: payload.confidence,
            trend,
            slope,
            model_version: payload.meta.model_version,
            timestamp: chrono::Utc::now().timestamp_millis(),
        })
    }
}

/// Classify the OLS slope of a predicted price path.
///
/// Thresholds mirror the prediction backend: |slope| > 0.5 is strong,
/// > 0.1 is directional, anything closer to zero is flat. Fewer than
/// two points cannot define a slope and classify as flat.
pub fn slope_trend(values: &[f64]) -> (TrendLabel, f64) {
    let n = values.len();
    if n < 2 {
        return (TrendLabel::Flat, 0.0);
    }

    let nf = n as f64;
    let sum_x: f64 = (0..n).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
    let sum_x2: f64 = (0..n).map(|i| (i as f64).powi(2)).sum();

    let denominator = nf * sum_x2 - sum_x * sum_x;
    let denominator = if denominator == 0.0 { 1e-8 } else { denominator };
    let slope = (nf * sum_xy - sum_x * sum_y) / denominator;

    let label = if slope > 0.5 {
        TrendLabel::StrongUp
    } else if slope > 0.1 {
        TrendLabel::Up
    } else if slope < -0.5 {
        TrendLabel::StrongDown
    } else if slope < -0.1 {
        TrendLabel::Down
    } else {
        TrendLabel::Flat
    };

    (label, slope)
}
