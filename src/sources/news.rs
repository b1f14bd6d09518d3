//! News feed client.

use crate::services::NewsStore;
use crate::types::NewsItem;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

const POLL_INTERVAL_SECS: u64 = 60;

/// rss2json-style feed envelope.
#[derive(Debug, Deserialize)]
struct FeedEnvelope {
    #[serde(default)]
    items: Vec<NewsItem>,
}

/// Client polling an rss2json-style news endpoint into a `NewsStore`.
#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    feed_url: String,
    store: Arc<NewsStore>,
}

impl NewsClient {
    pub fn new(feed_url: String, store: Arc<NewsStore>) -> Self {
        let client = Client::builder()
            .user_agent("Vantage/1.0")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            feed_url,
            store,
        }
    }

    /// Poll the feed once. Items missing a link cannot be
    /// deduplicated and are dropped.
    pub async fn fetch_once(&self) -> anyhow::Result<()> {
        let response = self.client.get(&self.feed_url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("news feed error: {}", response.status());
        }

        let envelope: FeedEnvelope = response.json().await?;
        let items: Vec<NewsItem> = envelope
            .items
            .into_iter()
            .filter(|item| !item.link.is_empty())
            .collect();

        self.store.update(items).await;
        Ok(())
    }

    /// Poll the feed forever. Failures keep the previous headlines.
    pub async fn start_polling(self) {
        info!("Starting news feed polling");
        let mut ticker =
            tokio::time::interval(tokio::time::Duration::from_secs(POLL_INTERVAL_SECS));
        loop {
            ticker.tick().await;
            if let Err(e) = self.fetch_once().await {
                error!("News fetch error: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_envelope_parsing() {
        let json = r#"{
            "status": "ok",
            "items": [
                {"link": "https://example.com/a", "title": "A", "pubDate": "2026-08-30", "author": "x", "description": "d"},
                {"link": "", "title": "no link"}
            ]
        }"#;
        let envelope: FeedEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.items.len(), 2);
        assert_eq!(envelope.items[0].link, "https://example.com/a");
    }

    #[test]
    fn test_feed_envelope_missing_items() {
        let envelope: FeedEnvelope = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert!(envelope.items.is_empty());
    }
}
