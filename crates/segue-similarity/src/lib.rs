//! Segue Similarity crate - precomputed similarity matrix, Top-K ranking,
//! and the recommender that composes ranking with the catalog.
//!
//! The matrix is computed offline, loaded once, and consumed read-only.
//! Ranking is deterministic: descending score with ascending-index
//! tie-breaking, and the query track is always excluded from its own
//! results.

pub mod matrix;
pub mod rank;
pub mod recommender;

pub use matrix::{load_matrix, SimilarityMatrix};
pub use rank::{Neighbor, SimilarityIndex};
pub use recommender::{Recommendation, Recommender};
