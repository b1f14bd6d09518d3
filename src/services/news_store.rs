//! Headline storage with link deduplication.

use crate::types::NewsItem;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Latest headlines plus the set of article links already seen.
pub struct NewsStore {
    items: RwLock<Vec<NewsItem>>,
    seen_links: DashMap<String, ()>,
    new_arrivals: RwLock<usize>,
}

impl NewsStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            items: RwLock::new(Vec::new()),
            seen_links: DashMap::new(),
            new_arrivals: RwLock::new(0),
        })
    }

    /// Replace the headline list with a fresh poll result and count
    /// how many links were not seen before.
    pub async fn update(&self, items: Vec<NewsItem>) {
        let mut fresh = 0;
        for item in &items {
            if self.seen_links.insert(item.link.clone(), ()).is_none() {
                fresh += 1;
            }
        }

        *self.items.write().await = items;
        *self.new_arrivals.write().await = fresh;
    }

    /// Current headlines.
    pub async fn items(&self) -> Vec<NewsItem> {
        self.items.read().await.clone()
    }

    /// Headlines first seen on the most recent poll.
    pub async fn new_arrivals(&self) -> usize {
        *self.new_arrivals.read().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(link: &str) -> NewsItem {
        NewsItem {
            link: link.to_string(),
            title: format!("Title for {}", link),
            pub_date: String::new(),
            author: String::new(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_first_poll_all_new() {
        let store = NewsStore::new();
        store.update(vec![item("a"), item("b")]).await;
        assert_eq!(store.new_arrivals().await, 2);
        assert_eq!(store.items().await.len(), 2);
    }

    #[tokio::test]
    async fn test_repeat_links_deduplicated() {
        let store = NewsStore::new();
        store.update(vec![item("a"), item("b")]).await;
        store.update(vec![item("b"), item("c")]).await;
        assert_eq!(store.new_arrivals().await, 1);
        // The list itself is wholesale-replaced.
        assert_eq!(store.items().await.len(), 2);
    }

    #[tokio::test]
    async fn test_unchanged_poll_no_arrivals() {
        let store = NewsStore::new();
        store.update(vec![item("a")]).await;
        store.update(vec![item("a")]).await;
        assert_eq!(store.new_arrivals().await, 0);
    }
}
