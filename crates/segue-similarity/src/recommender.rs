//! Recommender combining catalog resolution with Top-K ranking.
//!
//! The recommender takes a track name, resolves it through the catalog,
//! ranks the corresponding matrix row, and maps the returned indices back
//! to full track records. It is a pure query engine: no caching, no
//! session memory, no side effects.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use segue_catalog::Catalog;
use segue_core::error::{Result, SegueError};

use crate::rank::SimilarityIndex;

/// A single recommendation with the track's catalog attributes and score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub index: usize,
    pub name: String,
    pub track_id: Option<String>,
    pub score: f32,
}

/// Read-only recommendation engine over a shared catalog and similarity
/// index.
///
/// Both components are immutable after load, so one instance can be
/// shared behind an `Arc` across arbitrarily many concurrent queries.
#[derive(Debug)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    index: SimilarityIndex,
}

impl Recommender {
    /// Create a recommender over a catalog and a similarity index.
    ///
    /// Fails with `MalformedMatrix` if the index dimension does not match
    /// the catalog size; the pair came from inconsistent snapshots and no
    /// query against it can be trusted.
    pub fn new(catalog: Arc<Catalog>, index: SimilarityIndex) -> Result<Self> {
        if index.len() != catalog.len() {
            return Err(SegueError::MalformedMatrix(format!(
                "matrix dimension {} does not match catalog size {}",
                index.len(),
                catalog.len()
            )));
        }
        Ok(Self { catalog, index })
    }

    /// The catalog this recommender serves.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recommend the `k` tracks most similar to the named track.
    ///
    /// Resolution uses the catalog's first-match contract; unknown names
    /// fail with `NotFound`. The result is fully ranked or the call fails
    /// atomically; it never returns a partial or padded list.
    pub fn recommend(&self, name: &str, k: usize) -> Result<Vec<Recommendation>> {
        let query = self.catalog.resolve(name)?;
        self.recommend_by_index(query, k)
    }

    /// Recommend by catalog index instead of name.
    pub fn recommend_by_index(&self, query: usize, k: usize) -> Result<Vec<Recommendation>> {
        let neighbors = self.index.top_k(query, k)?;

        let mut recommendations = Vec::with_capacity(neighbors.len());
        for neighbor in neighbors {
            let track = self.catalog.get(neighbor.index)?;
            recommendations.push(Recommendation {
                index: track.index,
                name: track.name.clone(),
                track_id: track.track_id.clone(),
                score: neighbor.score,
            });
        }

        debug!(query, k, returned = recommendations.len(), "Recommendations built");
        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segue_catalog::TrackRecord;

    use crate::matrix::SimilarityMatrix;

    fn make_recommender() -> Recommender {
        let catalog = Arc::new(Catalog::new(vec![
            TrackRecord {
                name: "Alpha".to_string(),
                track_id: Some("id-a".to_string()),
            },
            TrackRecord {
                name: "Beta".to_string(),
                track_id: None,
            },
            TrackRecord {
                name: "Gamma".to_string(),
                track_id: Some("id-c".to_string()),
            },
            TrackRecord {
                name: "Delta".to_string(),
                track_id: None,
            },
            TrackRecord {
                name: "Epsilon".to_string(),
                track_id: None,
            },
        ]));
        let matrix = SimilarityMatrix::from_rows(
            vec![
                vec![1.0, 0.9, 0.9, 0.2, 0.1],
                vec![0.9, 1.0, 0.8, 0.3, 0.2],
                vec![0.9, 0.8, 1.0, 0.4, 0.3],
                vec![0.2, 0.3, 0.4, 1.0, 0.5],
                vec![0.1, 0.2, 0.3, 0.5, 1.0],
            ],
            5,
        )
        .unwrap();
        Recommender::new(catalog, SimilarityIndex::new(matrix)).unwrap()
    }

    #[test]
    fn test_recommend_maps_indices_to_tracks() {
        let recommender = make_recommender();
        let recs = recommender.recommend("Alpha", 3).unwrap();
        let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Gamma", "Delta"]);
        // Track attributes carried through for the presentation layer.
        assert_eq!(recs[1].track_id.as_deref(), Some("id-c"));
    }

    #[test]
    fn test_recommend_unknown_name() {
        let recommender = make_recommender();
        let err = recommender.recommend("Zeta", 3).unwrap_err();
        assert!(matches!(err, SegueError::NotFound { .. }));
    }

    #[test]
    fn test_recommend_excludes_query_track() {
        let recommender = make_recommender();
        let recs = recommender.recommend("Gamma", 10).unwrap();
        assert_eq!(recs.len(), 4);
        assert!(recs.iter().all(|r| r.name != "Gamma"));
    }

    #[test]
    fn test_recommend_by_index_out_of_range() {
        let recommender = make_recommender();
        assert!(matches!(
            recommender.recommend_by_index(9, 3),
            Err(SegueError::IndexOutOfRange { index: 9, len: 5 })
        ));
    }

    #[test]
    fn test_recommend_idempotent() {
        let recommender = make_recommender();
        let first = recommender.recommend("Beta", 4).unwrap();
        let second = recommender.recommend("Beta", 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_new_rejects_mismatched_dimensions() {
        let catalog = Arc::new(Catalog::new(vec![TrackRecord {
            name: "Alpha".to_string(),
            track_id: None,
        }]));
        let matrix =
            SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5, 1.0]], 2).unwrap();
        let err = Recommender::new(catalog, SimilarityIndex::new(matrix)).unwrap_err();
        assert!(matches!(err, SegueError::MalformedMatrix(_)));
    }

    #[test]
    fn test_concurrent_queries_share_one_instance() {
        let recommender = Arc::new(make_recommender());
        let expected = recommender.recommend("Alpha", 3).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let r = Arc::clone(&recommender);
                let want = expected.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        assert_eq!(r.recommend("Alpha", 3).unwrap(), want);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
