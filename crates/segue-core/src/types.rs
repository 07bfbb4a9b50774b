use serde::{Deserialize, Serialize};

/// One row in the catalog.
///
/// `index` is the track's position in the catalog and its row in the
/// similarity matrix. It is assigned once at load time and never reused or
/// reassigned. `name` is the external lookup key; uniqueness is not
/// guaranteed (first occurrence by catalog order wins on lookup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub index: usize,
    pub name: String,
    /// Streaming-service track identifier, when the dataset has one.
    pub track_id: Option<String>,
}
