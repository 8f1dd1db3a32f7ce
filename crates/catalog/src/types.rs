//! Core domain types for the show catalog.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, unique identifier for a show.
///
/// Type alias so call sites read as `ShowId` rather than raw `Uuid`.
pub type ShowId = Uuid;

/// One catalog entry as returned by a catalog source.
///
/// Immutable once fetched. Display fields beyond `title`/`author` are
/// carried for the presentation layer but nothing in the orchestration
/// core depends on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: ShowId,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Promotional placement flag; featured shows are grouped first.
    #[serde(default)]
    pub is_featured: bool,
}
