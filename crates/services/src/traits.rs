//! Collaborator contracts for the discover screen.
//!
//! Everything the orchestrator talks to lives behind one of these traits.
//! They are the screen's only suspension points, and all failure signaling
//! follows the absent-result convention: a catalog call that cannot produce
//! data returns `None`, which is distinct from `Some(vec![])` — a valid
//! zero-result answer.

use std::sync::Arc;

use async_trait::async_trait;
use catalog::{Show, ShowId};

/// Source of catalog data.
///
/// `Send + Sync` so sources can be shared across tasks behind an `Arc`.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the complete catalog. `None` means the fetch failed.
    async fn fetch_all(&self) -> Option<Vec<Arc<Show>>>;

    /// Search the catalog with the literal query text. `None` means the
    /// search could not run; an empty vec is a successful zero-hit result.
    async fn search(&self, query: &str) -> Option<Vec<Arc<Show>>>;
}

/// Per-show subscription status, owned outside the screen.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    async fn is_subscribed(&self, id: ShowId) -> bool;

    async fn unsubscribe(&self, show: &Show);
}

/// The category sub-state displayed alongside the discover groups.
///
/// Owned and rendered independently; the orchestrator only awaits its
/// initialization before publishing the first loaded snapshot, so the UI
/// can paint categories and groups in the same pass.
#[async_trait]
pub trait CategoryState: Send + Sync {
    async fn initialize(&self);
}

/// User-facing failure notification (dialog, toast, whatever the shell
/// provides). Invoked only when the initial catalog fetch fails.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn show_failure(&self, title: &str, message: &str, dismiss: &str);
}

/// Navigation target requested by the discover screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The full category-listing surface.
    CategoryBrowser,
}

/// Screen navigation, performed by the surrounding shell.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn go_to(&self, destination: Destination);
}
