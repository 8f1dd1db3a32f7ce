//! Parse JSON catalog fixtures into shows.
//!
//! The fixture format is a plain JSON array of show objects. It stands in
//! for whatever backend feeds the real catalog source; the demo CLI and
//! integration tests load their catalogs from it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{CatalogError, Result};
use crate::types::Show;

/// Load a catalog fixture from disk.
///
/// Returns the shows wrapped in `Arc`, matching how a catalog source hands
/// them out: the source keeps ownership, consumers hold references.
pub fn load_fixture(path: &Path) -> Result<Vec<Arc<Show>>> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_fixture(&contents)
}

/// Parse fixture contents already held in memory.
pub fn parse_fixture(json: &str) -> Result<Vec<Arc<Show>>> {
    let shows: Vec<Show> = serde_json::from_str(json)?;
    validate(&shows)?;
    Ok(shows.into_iter().map(Arc::new).collect())
}

/// Show ids must be unique; everything downstream keys on them.
fn validate(shows: &[Show]) -> Result<()> {
    let mut seen = HashSet::new();
    for show in shows {
        if !seen.insert(show.id) {
            return Err(CatalogError::Validation(format!(
                "duplicate show id {} ({})",
                show.id, show.title
            )));
        }
    }
    Ok(())
}
