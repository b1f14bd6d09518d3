use serde::{Deserialize, Serialize};

/// A single OHLCV candle.
///
/// `time` is unix seconds for the candle open. Sequences are ordered
/// ascending by time with unique timestamps; indicators operate purely
/// positionally and never mutate their input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Typical price: (high + low + close) / 3. Used by CCI and VWAP.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

/// A single derived indicator value stamped with its candle timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub time: i64,
    pub value: f64,
}

/// One MACD output point: macd line, signal line and histogram share
/// the same alignment after the left-trim in the MACD computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    pub time: i64,
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// A banded indicator point (Bollinger Bands, regression channel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    pub time: i64,
    pub middle: f64,
    pub upper: f64,
    pub lower: f64,
}

/// Binary trend state reported by Supertrend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
}

/// Supertrend output: the plotted line plus the trend state at the
/// latest candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupertrendSeries {
    pub line: Vec<IndicatorPoint>,
    pub trend: Option<TrendDirection>,
}

/// Ichimoku component series.
///
/// `displacement` is the conventional 26-period forward shift for the
/// spans. It is a display offset only; the values themselves are
/// computed without it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IchimokuSeries {
    pub tenkan: Vec<IndicatorPoint>,
    pub kijun: Vec<IndicatorPoint>,
    pub span_a: Vec<IndicatorPoint>,
    pub span_b: Vec<IndicatorPoint>,
    pub displacement: usize,
}

/// Classic daily pivot levels derived from the previous completed
/// UTC day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotLevels {
    pub pivot: f64,
    pub r1: f64,
    pub s1: f64,
    pub r2: f64,
    pub s2: f64,
}
