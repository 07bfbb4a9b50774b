//! The track catalog: name-to-index resolution and index-to-track lookup.

use segue_core::error::{Result, SegueError};
use segue_core::types::Track;

use crate::loader::TrackRecord;

/// Immutable ordered collection of tracks.
///
/// Indices are assigned by position at construction and double as row
/// indices into the similarity matrix. All operations are pure reads over
/// immutable state.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog from loaded records, assigning indices by position.
    pub fn new(records: Vec<TrackRecord>) -> Self {
        let tracks = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Track {
                index,
                name: record.name,
                track_id: record.track_id,
            })
            .collect();
        Self { tracks }
    }

    /// Resolve a track name to its catalog index.
    ///
    /// Names are matched exactly. If several tracks share a name, the first
    /// occurrence by catalog order wins; that is the documented contract,
    /// not an error.
    pub fn resolve(&self, name: &str) -> Result<usize> {
        self.tracks
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| SegueError::NotFound {
                name: name.to_string(),
            })
    }

    /// Look up the full track record for a catalog index.
    pub fn get(&self, index: usize) -> Result<&Track> {
        self.tracks
            .get(index)
            .ok_or(SegueError::IndexOutOfRange {
                index,
                len: self.tracks.len(),
            })
    }

    /// Number of tracks in the catalog.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the catalog contains no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterate over all tracks in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// All track names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tracks.iter().map(|t| t.name.as_str())
    }
}
