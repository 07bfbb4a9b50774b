//! Application state shared across all route handlers.
//!
//! AppState holds the read-only recommender and configuration. It is
//! passed to handlers via axum's State extractor.

use std::sync::Arc;
use std::time::Instant;

use segue_core::config::SegueConfig;
use segue_similarity::Recommender;

/// Shared application state.
///
/// Everything here is immutable after startup, so handlers clone the
/// `Arc`s freely and run concurrently with no locking.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<SegueConfig>,
    /// The recommendation engine (catalog + similarity index).
    pub recommender: Arc<Recommender>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with the given components.
    pub fn new(config: SegueConfig, recommender: Recommender) -> Self {
        Self {
            config: Arc::new(config),
            recommender: Arc::new(recommender),
            start_time: Instant::now(),
        }
    }
}
