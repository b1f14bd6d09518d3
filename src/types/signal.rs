use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Chart timeframe for signal calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
}

impl Timeframe {
    /// All timeframes the engine refreshes, in display order.
    pub const ALL: [Timeframe; 5] = [
        Timeframe::OneMinute,
        Timeframe::FiveMinutes,
        Timeframe::FifteenMinutes,
        Timeframe::ThirtyMinutes,
        Timeframe::OneHour,
    ];

    /// Upstream kline interval string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::OneMinute => "1m",
            Timeframe::FiveMinutes => "5m",
            Timeframe::FifteenMinutes => "15m",
            Timeframe::ThirtyMinutes => "30m",
            Timeframe::OneHour => "1h",
        }
    }

    /// Parse from the interval string used in API paths.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "1m" => Some(Timeframe::OneMinute),
            "5m" => Some(Timeframe::FiveMinutes),
            "15m" => Some(Timeframe::FifteenMinutes),
            "30m" => Some(Timeframe::ThirtyMinutes),
            "1h" => Some(Timeframe::OneHour),
            _ => None,
        }
    }

    /// Refresh cadence for this timeframe, carried over from the
    /// original dashboard schedule.
    pub fn refresh_interval(&self) -> Duration {
        match self {
            Timeframe::OneMinute => Duration::from_secs(20),
            Timeframe::FiveMinutes => Duration::from_secs(60),
            Timeframe::FifteenMinutes => Duration::from_secs(900),
            Timeframe::ThirtyMinutes => Duration::from_secs(180),
            Timeframe::OneHour => Duration::from_secs(360),
        }
    }
}

/// Directional forecast for one timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Forecast {
    Buy,
    Sell,
    #[default]
    Flat,
}

impl Forecast {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Forecast::Buy => "Buy",
            Forecast::Sell => "Sell",
            Forecast::Flat => "Flat",
        }
    }
}

/// Published signal for one (pair, timeframe).
///
/// Recomputed wholesale on each refresh; consumers never observe a
/// partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeSignal {
    pub forecast: Forecast,
    /// Confidence percentage, 0-100. A lower bound when some
    /// indicators abstained for lack of history.
    pub confidence: u8,
}

impl TimeframeSignal {
    /// The defined neutral value used when no data is available.
    pub fn neutral() -> Self {
        Self {
            forecast: Forecast::Flat,
            confidence: 0,
        }
    }
}

impl Default for TimeframeSignal {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Confidence-weighted combination of all per-timeframe forecasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterSignal {
    pub forecast: Forecast,
    pub confidence: u8,
}

/// Full signal picture for one trading pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairSignals {
    pub pair: String,
    pub timeframes: Vec<TimeframeEntry>,
    pub master: MasterSignal,
    /// Unix timestamp (milliseconds) when assembled.
    pub timestamp: i64,
}

/// One timeframe's signal inside a `PairSignals` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeEntry {
    pub timeframe: Timeframe,
    pub forecast: Forecast,
    pub confidence: u8,
}
