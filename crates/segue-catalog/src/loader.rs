//! Catalog snapshot loading.
//!
//! The offline pipeline exports the catalog as a JSON array of track
//! records. The loader reads it once at startup into an immutable
//! [`Catalog`]; nothing is written back at request time.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use segue_core::error::Result;

use crate::catalog::Catalog;

/// One record in the catalog snapshot file.
///
/// Indices are not part of the snapshot; they are assigned by array
/// position when the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRecord {
    pub name: String,
    #[serde(default)]
    pub track_id: Option<String>,
}

/// Load the catalog snapshot from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<TrackRecord> = serde_json::from_str(&content)?;
    let catalog = Catalog::new(records);
    info!(
        path = %path.display(),
        tracks = catalog.len(),
        "Catalog snapshot loaded"
    );
    Ok(catalog)
}
