//! Segue API crate - axum HTTP server and route handlers.
//!
//! Exposes the recommendation core over REST: catalog listing, track
//! lookup, Top-K recommendations, and a health check. The API is a thin
//! translation layer; all ranking semantics live in `segue-similarity`.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
