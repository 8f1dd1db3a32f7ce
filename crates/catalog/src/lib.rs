//! # Catalog Crate
//!
//! Domain model for the show catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (`Show`, `ShowId`)
//! - **fixture**: Parse a JSON catalog fixture into shows
//! - **error**: Error types for catalog loading
//!
//! The catalog source owns the `Show` values; everything downstream holds
//! them through `Arc<Show>` and never mutates them after fetch.
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::load_fixture;
//! use std::path::Path;
//!
//! let shows = load_fixture(Path::new("data/shows.json"))?;
//! for show in &shows {
//!     println!("{} by {}", show.title, show.author);
//! }
//! ```

// Public modules
pub mod error;
pub mod fixture;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use fixture::{load_fixture, parse_fixture};
pub use types::{Show, ShowId};
