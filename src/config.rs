use std::env;

const DEFAULT_PAIRS: &str = "BTCUSDT,ETHUSDT,BNBUSDT";
const DEFAULT_KLINE_LIMIT: usize = 200;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Trading pairs to refresh.
    pub pairs: Vec<String>,
    /// Candle window size requested per fetch.
    pub kline_limit: usize,
    /// Base URL of the klines market-data endpoint.
    pub market_api_url: String,
    /// Base URL of the external prediction service (optional).
    pub prediction_api_url: Option<String>,
    /// News feed URL (optional).
    pub news_feed_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let pairs = env::var("PAIRS")
            .unwrap_or_else(|_| DEFAULT_PAIRS.to_string())
            .split(',')
            .map(|p| p.trim().to_uppercase())
            .filter(|p| !p.is_empty())
            .collect();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            pairs,
            kline_limit: env::var("KLINE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_KLINE_LIMIT),
            market_api_url: env::var("MARKET_API_URL")
                .unwrap_or_else(|_| "https://api.binance.com/api/v3".to_string()),
            prediction_api_url: env::var("PREDICTION_API_URL").ok(),
            news_feed_url: env::var("NEWS_FEED_URL").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            pairs: DEFAULT_PAIRS.split(',').map(String::from).collect(),
            kline_limit: DEFAULT_KLINE_LIMIT,
            market_api_url: "https://api.binance.com/api/v3".to_string(),
            prediction_api_url: None,
            news_feed_url: None,
        }
    }
}
