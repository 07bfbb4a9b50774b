//! The precomputed similarity matrix and its snapshot loader.
//!
//! Entry (i, j) is the offline-computed similarity between catalog tracks
//! i and j. The matrix is validated once at construction and never mutated,
//! so queries read it concurrently without locking.

use std::path::Path;

use tracing::info;

use segue_core::error::{Result, SegueError};

/// Square N×N matrix of pairwise similarity scores, row-major.
///
/// Symmetry is a property of the offline construction and is not enforced
/// at read time. The diagonal holds self-similarity; ranking excludes it
/// explicitly rather than trusting it to sort first.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    /// Build a matrix from raw rows, validating shape against the catalog.
    ///
    /// Fails with `MalformedMatrix` if the row count or any row length does
    /// not equal `expected`. This is the one failure that must prevent
    /// startup entirely; a mismatched matrix cannot serve any query.
    pub fn from_rows(rows: Vec<Vec<f32>>, expected: usize) -> Result<Self> {
        if rows.len() != expected {
            return Err(SegueError::MalformedMatrix(format!(
                "matrix has {} rows, catalog has {} tracks",
                rows.len(),
                expected
            )));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(SegueError::MalformedMatrix(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    expected
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Matrix dimension N (equal to the catalog size).
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// The full score row for one track: N scores, one per catalog track,
    /// including self.
    pub fn row(&self, index: usize) -> Result<&[f32]> {
        self.rows
            .get(index)
            .map(|r| r.as_slice())
            .ok_or(SegueError::IndexOutOfRange {
                index,
                len: self.rows.len(),
            })
    }
}

/// Load the similarity matrix snapshot from a JSON file.
///
/// `expected` is the catalog size; dimension mismatches fail fast here so
/// the process refuses to start with an inconsistent snapshot pair.
pub fn load_matrix(path: &Path, expected: usize) -> Result<SimilarityMatrix> {
    let content = std::fs::read_to_string(path)?;
    let rows: Vec<Vec<f32>> = serde_json::from_str(&content)?;
    let matrix = SimilarityMatrix::from_rows(rows, expected)?;
    info!(
        path = %path.display(),
        dimension = matrix.dimension(),
        "Similarity matrix loaded"
    );
    Ok(matrix)
}
