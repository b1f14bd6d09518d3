use serde::{Deserialize, Serialize};

/// Forecasting model offered by the external prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PredictionModel {
    #[default]
    Prophet,
    Xgboost,
    Lstm,
    Ensemble,
}

impl PredictionModel {
    /// Parse from a query-string value.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "prophet" => Some(Self::Prophet),
            "xgboost" | "xgb" => Some(Self::Xgboost),
            "lstm" => Some(Self::Lstm),
            "ensemble" => Some(Self::Ensemble),
            _ => None,
        }
    }

    /// Path segment used by the prediction service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prophet => "prophet",
            Self::Xgboost => "xgboost",
            Self::Lstm => "lstm",
            Self::Ensemble => "ensemble",
        }
    }
}

/// One forecast point from the prediction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionPoint {
    /// Forecast datetime, as supplied by the service.
    pub ds: String,
    pub yhat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yhat_lower: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yhat_upper: Option<f64>,
}

/// Metadata block returned by the prediction service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

/// Raw payload from the external prediction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub predictions: Vec<PredictionPoint>,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub meta: PredictionMeta,
}

/// Slope classification of a predicted price path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendLabel {
    #[serde(rename = "STRONG UP")]
    StrongUp,
    #[serde(rename = "UP")]
    Up,
    #[serde(rename = "FLAT")]
    Flat,
    #[serde(rename = "DOWN")]
    Down,
    #[serde(rename = "STRONG DOWN")]
    StrongDown,
}

/// Prediction payload enriched with the slope trend, as served by
/// this process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionView {
    pub symbol: String,
    pub model: PredictionModel,
    pub predictions: Vec<PredictionPoint>,
    pub confidence: f64,
    pub trend: TrendLabel,
    pub slope: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_str() {
        assert_eq!(PredictionModel::from_str("prophet"), Some(PredictionModel::Prophet));
        assert_eq!(PredictionModel::from_str("XGB"), Some(PredictionModel::Xgboost));
        assert_eq!(PredictionModel::from_str("unknown"), None);
    }

    #[test]
    fn test_prediction_response_lenient_parsing() {
        // Missing optional fields must not fail deserialization.
        let json = r#"{"predictions": [{"ds": "2026-01-01T00:00:00", "yhat": 100.0}]}"#;
        let parsed: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.predictions.len(), 1);
        assert_eq!(parsed.confidence, 0.0);
        assert!(parsed.meta.model_version.is_none());
    }

    #[test]
    fn test_trend_label_wire_format() {
        let json = serde_json::to_string(&TrendLabel::StrongUp).unwrap();
        assert_eq!(json, "\"STRONG UP\"");
    }
}
