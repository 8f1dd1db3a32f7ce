//! In-memory catalog and subscription services.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalog::{Show, ShowId};
use tracing::debug;

use crate::traits::{CatalogSource, SubscriptionStore};

/// Catalog source backed by a fixed show list.
///
/// Search is a case-insensitive substring match on the title, the
/// in-process stand-in for whatever query the real backend would run.
pub struct InMemoryCatalog {
    shows: Vec<Arc<Show>>,
}

impl InMemoryCatalog {
    pub fn new(shows: Vec<Arc<Show>>) -> Self {
        Self { shows }
    }

    /// Build a catalog from a JSON fixture on disk.
    pub fn from_fixture(path: &Path) -> catalog::Result<Self> {
        Ok(Self::new(catalog::load_fixture(path)?))
    }

    pub fn shows(&self) -> &[Arc<Show>] {
        &self.shows
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn fetch_all(&self) -> Option<Vec<Arc<Show>>> {
        Some(self.shows.clone())
    }

    async fn search(&self, query: &str) -> Option<Vec<Arc<Show>>> {
        let needle = query.to_lowercase();
        let hits: Vec<Arc<Show>> = self
            .shows
            .iter()
            .filter(|show| show.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        debug!(query, hits = hits.len(), "in-memory catalog search");
        Some(hits)
    }
}

/// Subscription store backed by a mutex-guarded id set.
#[derive(Default)]
pub struct InMemorySubscriptions {
    subscribed: Mutex<HashSet<ShowId>>,
}

impl InMemorySubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the store with already-subscribed show ids.
    pub fn with_subscribed(ids: impl IntoIterator<Item = ShowId>) -> Self {
        Self {
            subscribed: Mutex::new(ids.into_iter().collect()),
        }
    }

    /// Seeding hook for demos and tests; the discover screen itself never
    /// adds a subscription.
    pub fn subscribe(&self, id: ShowId) {
        self.subscribed.lock().unwrap().insert(id);
    }

    pub fn subscribed_count(&self) -> usize {
        self.subscribed.lock().unwrap().len()
    }
}

#[async_trait]
impl SubscriptionStore for InMemorySubscriptions {
    async fn is_subscribed(&self, id: ShowId) -> bool {
        self.subscribed.lock().unwrap().contains(&id)
    }

    async fn unsubscribe(&self, show: &Show) {
        let removed = self.subscribed.lock().unwrap().remove(&show.id);
        debug!(show = %show.title, removed, "unsubscribe");
    }
}
