//! Route handler functions for all API endpoints.
//!
//! Each handler extracts query/path parameters via axum extractors, calls
//! into the recommender, and returns JSON responses. Domain errors from
//! the core surface as typed `ApiError`s; handlers never substitute
//! defaults for a failed lookup.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use segue_core::types::Track;
use segue_similarity::Recommendation;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Query parameter types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    pub track: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct TracksParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub catalog_size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TracksResponse {
    pub tracks: Vec<Track>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub query: Track,
    pub recommendations: Vec<Recommendation>,
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET /health - liveness plus catalog summary.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        catalog_size: state.recommender.catalog().len(),
    })
}

/// GET /tracks - paginated catalog listing.
pub async fn list_tracks(
    State(state): State<AppState>,
    Query(params): Query<TracksParams>,
) -> Result<Json<TracksResponse>, ApiError> {
    let catalog = state.recommender.catalog();
    let total = catalog.len();
    let offset = params.offset.unwrap_or(0);
    let limit = params.limit.unwrap_or(100).clamp(1, 1000);

    let tracks: Vec<Track> = catalog.iter().skip(offset).take(limit).cloned().collect();

    Ok(Json(TracksResponse {
        tracks,
        total,
        offset,
        limit,
    }))
}

/// GET /tracks/{index} - single track by catalog index.
pub async fn get_track(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Track>, ApiError> {
    let track = state.recommender.catalog().get(index)?;
    Ok(Json(track.clone()))
}

/// GET /recommend - Top-K recommendations for a named track.
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let name = params.track.ok_or_else(|| {
        ApiError::BadRequest("Parameter 'track' is required for recommendations".to_string())
    })?;

    if name.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Parameter 'track' must not be empty".to_string(),
        ));
    }

    let defaults = &state.config.recommend;
    let limit = params
        .limit
        .unwrap_or(defaults.default_limit)
        .min(defaults.max_limit);
    if limit == 0 {
        return Err(ApiError::BadRequest(
            "Parameter 'limit' must be at least 1".to_string(),
        ));
    }

    let query_index = state.recommender.catalog().resolve(&name)?;
    let query = state.recommender.catalog().get(query_index)?.clone();
    let recommendations = state.recommender.recommend_by_index(query_index, limit)?;

    Ok(Json(RecommendResponse {
        query,
        recommendations,
    }))
}
