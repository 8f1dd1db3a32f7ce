//! # Discover Orchestrator
//!
//! This module coordinates the discover screen:
//! 1. Fetch the catalog (or search it)
//! 2. Initialize the category sub-state before the first paint
//! 3. Convert shows into presentation tiles (one subscription lookup each)
//! 4. Partition tiles into the featured / for-you groups
//! 5. Publish the grouped and flat views as one consistent snapshot
//!
//! All collaborator calls go through the traits in the `services` crate;
//! the orchestrator itself has no I/O of its own. No error ever crosses
//! this boundary — a failed fetch notifies the user and leaves the state
//! untouched, a failed search is a silent no-op.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use catalog::Show;
use grouping::{ShowTile, group_by_featured};
use services::{CatalogSource, CategoryState, Destination, Navigator, Notifier, SubscriptionStore};

use crate::snapshot::{DiscoverSnapshot, ScreenPhase};

/// Fixed failure triple shown when the initial catalog fetch fails.
/// Localization happens in the shell, outside this core.
pub const LOAD_FAILURE_TITLE: &str = "Unable to load shows";
pub const LOAD_FAILURE_MESSAGE: &str = "Check your connection and try again.";
pub const LOAD_FAILURE_DISMISS: &str = "Close";

/// How overlapping fetch/search operations resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencingPolicy {
    /// Whichever operation completes last publishes last and wins. This is
    /// the historical behavior of the screen and the default.
    #[default]
    LastWriterWins,
    /// Each operation takes a monotonic ticket at entry; a completed
    /// operation publishes only if no newer operation has started since.
    /// Superseded results are discarded silently.
    DropStale,
}

/// Sequences all user-triggered and lifecycle-triggered operations on the
/// discover screen and keeps the published views mutually consistent.
pub struct DiscoverOrchestrator {
    catalog: Arc<dyn CatalogSource>,
    subscriptions: Arc<dyn SubscriptionStore>,
    categories: Arc<dyn CategoryState>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    sequencing: SequencingPolicy,
    ticket: AtomicU64,
    state: watch::Sender<DiscoverSnapshot>,
}

/// A fetch/search in flight: its ticket plus the phase to restore if the
/// operation fails without publishing.
struct Pending {
    ticket: u64,
    prior_phase: ScreenPhase,
}

impl DiscoverOrchestrator {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        subscriptions: Arc<dyn SubscriptionStore>,
        categories: Arc<dyn CategoryState>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (state, _) = watch::channel(DiscoverSnapshot::default());
        Self {
            catalog,
            subscriptions,
            categories,
            notifier,
            navigator,
            sequencing: SequencingPolicy::default(),
            ticket: AtomicU64::new(0),
            state,
        }
    }

    /// Override the overlapping-operation policy (builder style).
    pub fn with_sequencing(mut self, sequencing: SequencingPolicy) -> Self {
        self.sequencing = sequencing;
        self
    }

    /// Subscribe to snapshot updates. Each successful fetch or search sends
    /// a fully replaced snapshot; subscribers never see partial updates.
    pub fn subscribe(&self) -> watch::Receiver<DiscoverSnapshot> {
        self.state.subscribe()
    }

    /// Current snapshot, cloned out of the channel.
    pub fn snapshot(&self) -> DiscoverSnapshot {
        self.state.borrow().clone()
    }

    /// Load the screen: fetch the full catalog, hydrate the category
    /// sub-state, then publish the grouped and flat views.
    ///
    /// On fetch failure the user is notified once and the screen state is
    /// left exactly as it was — no partial update. Safe to call repeatedly;
    /// every successful call fully replaces the prior state.
    pub async fn initialize(&self) {
        let pending = self.begin();

        let Some(shows) = self.catalog.fetch_all().await else {
            warn!("catalog fetch failed; leaving screen state untouched");
            self.abort(pending);
            self.notifier
                .show_failure(LOAD_FAILURE_TITLE, LOAD_FAILURE_MESSAGE, LOAD_FAILURE_DISMISS)
                .await;
            return;
        };
        info!(shows = shows.len(), "catalog fetched");

        // The UI may read category state in the same paint as the groups,
        // so the sub-state must be ready before the snapshot goes out.
        self.categories.initialize().await;

        let tiles = self.build_tiles(shows).await;
        self.publish(pending, tiles, None);
    }

    /// Run a live search. A blank or whitespace-only query re-fetches the
    /// full catalog (a fresh source call, never a cached replay); anything
    /// else is passed to the source verbatim.
    ///
    /// An absent result keeps the prior view with no notification — search
    /// failures are silent by design, unlike `initialize`. An empty result
    /// list is a success and publishes empty views.
    pub async fn search(&self, query: &str) {
        let pending = self.begin();

        let result = if query.trim().is_empty() {
            debug!("blank query; re-fetching full catalog");
            self.catalog.fetch_all().await
        } else {
            self.catalog.search(query).await
        };

        let Some(shows) = result else {
            debug!(query, "search produced no result; keeping current view");
            self.abort(pending);
            return;
        };

        let tiles = self.build_tiles(shows).await;
        self.publish(pending, tiles, Some(query.to_string()));
    }

    /// Remove the subscription for the tile's show and write the store's
    /// fresh answer back into the tile.
    ///
    /// The affordance is one-directional: it always unsubscribes, whatever
    /// the current flag says. That matches the shipped behavior of the
    /// screen; the flag still ends up honest because the store is re-read
    /// after the call rather than assumed.
    pub async fn toggle_subscription(&self, tile: &ShowTile) {
        let show = tile.show();
        self.subscriptions.unsubscribe(show).await;
        let fresh = self.subscriptions.is_subscribed(show.id).await;
        debug!(show = %show.title, subscribed = fresh, "subscription toggled");
        tile.set_subscribed(fresh);
    }

    /// Jump to the category-listing surface. No state mutation.
    pub async fn open_category_browser(&self) {
        self.navigator.go_to(Destination::CategoryBrowser).await;
    }

    /// One subscription-store lookup per show, order preserved.
    async fn build_tiles(&self, shows: Vec<Arc<Show>>) -> Vec<Arc<ShowTile>> {
        let mut tiles = Vec::with_capacity(shows.len());
        for show in shows {
            let subscribed = self.subscriptions.is_subscribed(show.id).await;
            tiles.push(Arc::new(ShowTile::new(show, subscribed)));
        }
        tiles
    }

    /// Enter the transient loading phase and take a ticket.
    fn begin(&self) -> Pending {
        let ticket = self.ticket.fetch_add(1, Ordering::AcqRel) + 1;
        let prior_phase = self.state.borrow().phase;
        self.state
            .send_modify(|snap| snap.phase = ScreenPhase::Loading);
        Pending {
            ticket,
            prior_phase,
        }
    }

    /// Leave a failed operation without touching the views. Restores the
    /// pre-operation phase unless a newer operation has already published.
    fn abort(&self, pending: Pending) {
        self.state.send_modify(|snap| {
            if snap.phase == ScreenPhase::Loading {
                snap.phase = pending.prior_phase;
            }
        });
    }

    /// Publish fully replaced grouped and flat views as one snapshot.
    fn publish(&self, pending: Pending, tiles: Vec<Arc<ShowTile>>, search_text: Option<String>) {
        if self.sequencing == SequencingPolicy::DropStale
            && pending.ticket != self.ticket.load(Ordering::Acquire)
        {
            debug!(ticket = pending.ticket, "discarding superseded result");
            return;
        }

        let groups = group_by_featured(&tiles);
        info!(
            shows = tiles.len(),
            groups = groups.len(),
            "publishing discover snapshot"
        );
        self.state.send_modify(|snap| {
            snap.groups = groups;
            snap.shows = tiles;
            if let Some(text) = search_text {
                snap.search_text = text;
            }
            snap.phase = ScreenPhase::Loaded;
        });
    }
}
