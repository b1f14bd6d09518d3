//! Binance klines REST client.

use crate::types::{Candle, Timeframe};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Client for a Binance-style klines endpoint.
///
/// The endpoint returns an array of arrays:
/// `[openTime(ms), open, high, low, close, volume, ...]` with the
/// numeric fields encoded as strings. Anything malformed degrades to
/// an empty candle list rather than an error, so downstream produces
/// the same neutral result as insufficient history.
#[derive(Clone)]
pub struct KlineClient {
    client: Client,
    base_url: String,
}

impl KlineClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .user_agent("Vantage/1.0")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }

    /// Fetch one candle window. Network and HTTP failures are errors;
    /// a syntactically valid but malformed payload is an empty window.
    pub async fn fetch_klines(
        &self,
        pair: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> anyhow::Result<Vec<Candle>> {
        let url = format!(
            "{}/klines?symbol={}&interval={}&limit={}",
            self.base_url,
            pair.to_uppercase(),
            timeframe.as_str(),
            limit
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let snippet: String = text.chars().take(200).collect();
            warn!("Klines API returned {}: {}", status, snippet);
            anyhow::bail!("klines API error: {}", status);
        }

        let payload: Value = response.json().await?;
        let candles = parse_klines(&payload);
        debug!(
            "Fetched {} candles for {} {}",
            candles.len(),
            pair,
            timeframe.as_str()
        );
        Ok(candles)
    }
}

/// Parse a klines payload into candles, skipping malformed rows.
/// Non-array payloads yield an empty list.
pub fn parse_klines(payload: &Value) -> Vec<Candle> {
    let Some(rows) = payload.as_array() else {
        return Vec::new();
    };

    rows.iter().filter_map(parse_row).collect()
}

fn parse_row(row: &Value) -> Option<Candle> {
    let fields = row.as_array()?;
    if fields.len() < 6 {
        return None;
    }

    Some(Candle {
        time: fields[0].as_i64()? / 1000,
        open: parse_number(&fields[1])?,
        high: parse_number(&fields[2])?,
        low: parse_number(&fields[3])?,
        close: parse_number(&fields[4])?,
        volume: parse_number(&fields[5])?,
    })
}

/// Klines encode prices as strings but accept raw numbers too.
fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_klines_happy_path() {
        let payload = json!([
            [1700000000000i64, "100.5", "101.0", "99.5", "100.8", "12.34", 1700000059999i64],
            [1700000060000i64, "100.8", "102.0", "100.2", "101.5", "8.00"]
        ]);
        let candles = parse_klines(&payload);
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].time, 1_700_000_000);
        assert!((candles[0].open - 100.5).abs() < 1e-12);
        assert!((candles[1].close - 101.5).abs() < 1e-12);
        assert!((candles[1].volume - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_klines_numeric_fields() {
        let payload = json!([[1700000000000i64, 100.5, 101.0, 99.5, 100.8, 12.34]]);
        let candles = parse_klines(&payload);
        assert_eq!(candles.len(), 1);
        assert!((candles[0].high - 101.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_klines_non_array_payload() {
        assert!(parse_klines(&json!({"code": -1121, "msg": "Invalid symbol."})).is_empty());
        assert!(parse_klines(&json!("error")).is_empty());
        assert!(parse_klines(&Value::Null).is_empty());
    }

    #[test]
    fn test_parse_klines_skips_malformed_rows() {
        let payload = json!([
            [1700000000000i64, "100.5", "101.0", "99.5", "100.8", "12.34"],
            [1700000060000i64, "not-a-number", "101.0", "99.5", "100.8", "12.34"],
            [1700000120000i64, "100.0"],
            "garbage",
            [1700000180000i64, "100.8", "102.0", "100.2", "101.5", "8.00"]
        ]);
        let candles = parse_klines(&payload);
        assert_eq!(candles.len(), 2);
    }

    #[test]
    fn test_parse_klines_millisecond_conversion() {
        let payload = json!([[1700000123999i64, "1", "1", "1", "1", "1"]]);
        let candles = parse_klines(&payload);
        assert_eq!(candles[0].time, 1_700_000_123);
    }
}
