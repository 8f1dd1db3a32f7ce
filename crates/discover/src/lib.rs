//! Discover-screen orchestration for podscout.
//!
//! This crate contains the orchestrator that sequences every operation on
//! the discover screen: the initial catalog fetch, live search, the
//! subscription toggle, and the jump to the category browser.

pub mod orchestrator;
pub mod snapshot;

pub use orchestrator::{
    DiscoverOrchestrator, LOAD_FAILURE_DISMISS, LOAD_FAILURE_MESSAGE, LOAD_FAILURE_TITLE,
    SequencingPolicy,
};
pub use snapshot::{DiscoverSnapshot, ScreenPhase};
