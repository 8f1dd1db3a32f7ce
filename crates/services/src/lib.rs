//! # Services Crate
//!
//! Collaborator contracts consumed by the discover orchestrator, plus the
//! in-process implementations used by the demo CLI and integration tests.
//!
//! ## Components
//!
//! ### Contracts (`traits`)
//! Five `async_trait` interfaces: `CatalogSource`, `SubscriptionStore`,
//! `CategoryState`, `Notifier`, `Navigator`. The orchestrator holds them as
//! `Arc<dyn Trait>` and never sees a concrete service type.
//!
//! ### In-memory implementations (`memory`)
//! `InMemoryCatalog` (backed by a fixture-loaded show list, substring title
//! search) and `InMemorySubscriptions` (a mutex-guarded id set). These are
//! real implementations, not test doubles — the CLI runs on them.
//!
//! ### Logging implementations (`log`)
//! `NoopCategoryState`, `LogNotifier`, `LogNavigator`: stand-ins for the
//! excluded UI surfaces that report through `tracing` instead of rendering.

// Public modules
pub mod log;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use log::{LogNavigator, LogNotifier, NoopCategoryState};
pub use memory::{InMemoryCatalog, InMemorySubscriptions};
pub use traits::{CatalogSource, CategoryState, Destination, Navigator, Notifier, SubscriptionStore};
