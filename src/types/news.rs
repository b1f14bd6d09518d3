use serde::{Deserialize, Serialize};

/// One headline from the upstream news feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Canonical article URL, used for deduplication.
    pub link: String,
    pub title: String,
    #[serde(default)]
    pub pub_date: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// Response for the news endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub items: Vec<NewsItem>,
    /// Headlines first seen on the most recent poll.
    pub new_arrivals: usize,
    pub timestamp: i64,
}
