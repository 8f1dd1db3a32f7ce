//! Presentation grouping for the discover screen.
//!
//! This crate provides:
//! - `ShowTile`: one show plus its mutable is-subscribed flag
//! - `ShowGroup` / `GroupLabel`: a labeled, ordered slice of the catalog
//! - `group_by_featured`: the pure partition function behind the grouped view
//!
//! ## Architecture
//! The orchestrator rebuilds tiles wholesale on every fetch or search and
//! runs them through `group_by_featured` to derive the grouped view. The
//! flat view and the grouped view share the same `Arc<ShowTile>` instances,
//! so a subscription toggle is visible in both without republishing.

pub mod engine;
pub mod tile;

// Re-export main types
pub use engine::group_by_featured;
pub use tile::{GroupLabel, ShowGroup, ShowTile};
