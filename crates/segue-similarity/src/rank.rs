//! Top-K ranking over a similarity matrix row.

use tracing::debug;

use segue_core::error::{Result, SegueError};

use crate::matrix::SimilarityMatrix;

/// A ranked neighbor: the catalog index of a similar track and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub score: f32,
}

/// Read-only Top-K query engine over a [`SimilarityMatrix`].
///
/// Holds no mutable state; any number of `top_k` calls may run
/// concurrently against the same instance.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    matrix: SimilarityMatrix,
}

impl SimilarityIndex {
    pub fn new(matrix: SimilarityMatrix) -> Self {
        Self { matrix }
    }

    /// Number of tracks the index covers.
    pub fn len(&self) -> usize {
        self.matrix.dimension()
    }

    /// Whether the index covers no tracks.
    pub fn is_empty(&self) -> bool {
        self.matrix.dimension() == 0
    }

    /// Return the `k` most similar other tracks for a query index, ranked
    /// by descending score.
    ///
    /// Exact-score ties order by ascending catalog index, which makes the
    /// output deterministic even when the precomputed matrix contains
    /// equal scores for near-duplicate tracks. The query track itself is
    /// excluded explicitly, never assumed to be rank 0. If fewer than `k`
    /// other tracks exist, all of them are returned; that is not an error.
    pub fn top_k(&self, query: usize, k: usize) -> Result<Vec<Neighbor>> {
        let n = self.matrix.dimension();
        if query >= n {
            return Err(SegueError::IndexOutOfRange {
                index: query,
                len: n,
            });
        }

        let row = self.matrix.row(query)?;

        let mut scored: Vec<Neighbor> = row
            .iter()
            .enumerate()
            .map(|(index, &score)| Neighbor { index, score })
            .collect();

        // Descending by score; equal scores break to the smaller index.
        // The key is a total order, so the sort is well-defined even when
        // a malformed snapshot contains NaN.
        scored.sort_by(|a, b| {
            sort_score(b.score)
                .total_cmp(&sort_score(a.score))
                .then_with(|| a.index.cmp(&b.index))
        });

        let neighbors: Vec<Neighbor> = scored
            .into_iter()
            .filter(|n| n.index != query)
            .take(k)
            .collect();

        debug!(query, k, returned = neighbors.len(), "Top-K ranked");
        Ok(neighbors)
    }
}

/// Sort key that ranks NaN below every real score.
fn sort_score(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        score
    }
}
