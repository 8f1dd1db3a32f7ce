//! The observable screen state published to the UI.

use std::sync::Arc;

use grouping::{ShowGroup, ShowTile};

/// Lifecycle phase of the discover screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenPhase {
    /// No catalog data has been published yet.
    #[default]
    Uninitialized,
    /// A fetch or search is in flight; the views still show the prior data.
    Loading,
    /// The views reflect a completed fetch or search.
    Loaded,
}

/// Everything the UI needs to render the discover screen.
///
/// Published through a `tokio::sync::watch` channel as a plain immutable
/// value; the binding layer that turns snapshots into view updates is a
/// presentation concern outside this crate.
///
/// The grouped and flat views share the same `Arc<ShowTile>` instances —
/// grouping is a partition of the flat list, and a subscription toggle on a
/// tile shows up in both views without a republish.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscoverSnapshot {
    /// Grouped view: featured shows first, then the rest. Empty groups are
    /// never present.
    pub groups: Vec<ShowGroup>,
    /// Flat view: every tile exactly once, in catalog order.
    pub shows: Vec<Arc<ShowTile>>,
    /// The query text behind the current views; empty after a full fetch
    /// that was not triggered by a search box.
    pub search_text: String,
    pub phase: ScreenPhase,
}

impl DiscoverSnapshot {
    /// True once a fetch or search has published data.
    pub fn is_loaded(&self) -> bool {
        self.phase == ScreenPhase::Loaded
    }
}
