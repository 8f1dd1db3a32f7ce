//! Presentation-state types shared by the grouped and flat views.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use catalog::Show;

/// One show as presented on the discover screen.
///
/// Holds the show by reference (`Arc`, owned by the catalog source) and a
/// derived is-subscribed flag. The flag is the only mutable presentation
/// state in the system; it is set from the subscription store when the tile
/// is built and rewritten from a fresh store read after a toggle.
///
/// Tiles are always shared as `Arc<ShowTile>` between the grouped and flat
/// views, which is what makes a toggle visible in both at once.
#[derive(Debug)]
pub struct ShowTile {
    show: Arc<Show>,
    subscribed: AtomicBool,
}

impl ShowTile {
    pub fn new(show: Arc<Show>, subscribed: bool) -> Self {
        Self {
            show,
            subscribed: AtomicBool::new(subscribed),
        }
    }

    pub fn show(&self) -> &Arc<Show> {
        &self.show
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed.load(Ordering::Acquire)
    }

    pub fn set_subscribed(&self, value: bool) {
        self.subscribed.store(value, Ordering::Release);
    }
}

impl PartialEq for ShowTile {
    fn eq(&self, other: &Self) -> bool {
        self.show == other.show && self.is_subscribed() == other.is_subscribed()
    }
}

/// Label of a display group. Exactly two exist; `Featured` always renders
/// ahead of `ForYou`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupLabel {
    Featured,
    ForYou,
}

impl GroupLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            GroupLabel::Featured => "featured",
            GroupLabel::ForYou => "for-you",
        }
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled, ordered run of tiles. Rebuilt from scratch on every state
/// change; never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowGroup {
    pub label: GroupLabel,
    pub shows: Vec<Arc<ShowTile>>,
}
