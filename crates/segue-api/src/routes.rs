//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, compression, and all
//! endpoint handlers.

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use segue_core::error::SegueError;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS: allow localhost origins for a local front end.
    let port = state.config.server.port;
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([
            format!("http://127.0.0.1:{}", port)
                .parse::<HeaderValue>()
                .expect("valid origin"),
            format!("http://localhost:{}", port)
                .parse::<HeaderValue>()
                .expect("valid origin"),
        ]))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/tracks", get(handlers::list_tracks))
        .route("/tracks/{index}", get(handlers::get_track))
        .route("/recommend", get(handlers::recommend))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server on the configured address.
///
/// Binds to 127.0.0.1 (localhost only) on the port from config.
pub async fn start_server(state: AppState) -> Result<(), SegueError> {
    let port = state.config.server.port;
    let addr = format!("127.0.0.1:{}", port);

    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SegueError::Api(format!("Failed to bind: {}", e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| SegueError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
