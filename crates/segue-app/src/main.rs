//! Segue application binary - composition root.
//!
//! Ties together all Segue crates into a single executable:
//! 1. Parse CLI arguments and initialize tracing
//! 2. Load configuration from TOML
//! 3. Load the catalog snapshot, then the similarity matrix validated
//!    against the catalog size (a mismatch aborts startup)
//! 4. Build the recommender and start the axum REST API server

mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use segue_api::{routes, AppState};
use segue_catalog::load_catalog;
use segue_core::config::SegueConfig;
use segue_similarity::{load_matrix, Recommender, SimilarityIndex};

use cli::CliArgs;

/// Expand ~ to the home directory in a path string.
fn resolve_data_dir(data_dir: &str) -> PathBuf {
    if let Some(rest) = data_dir.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(data_dir)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config first; the log level may come from it.
    let config_file = args.resolve_config_path();
    let mut config = SegueConfig::load_or_default(&config_file);

    if let Some(level) = args.resolve_log_level() {
        config.general.log_level = level;
    }
    if let Some(dir) = args.resolve_data_dir() {
        config.general.data_dir = dir;
    }
    config.server.port = args.resolve_port(config.server.port);

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting Segue v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Snapshots: catalog first, then the matrix validated against it.
    let data_dir = resolve_data_dir(&config.general.data_dir);
    let catalog_path = data_dir.join(&config.catalog.catalog_file);
    let matrix_path = data_dir.join(&config.catalog.matrix_file);

    let catalog = match load_catalog(&catalog_path) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            tracing::error!(path = %catalog_path.display(), error = %e, "Failed to load catalog snapshot");
            return Err(e.into());
        }
    };

    // A dimension mismatch here is fatal: no query against an inconsistent
    // snapshot pair can be trusted, so refuse to start.
    let matrix = match load_matrix(&matrix_path, catalog.len()) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!(path = %matrix_path.display(), error = %e, "Failed to load similarity matrix");
            return Err(e.into());
        }
    };

    let recommender = Recommender::new(Arc::clone(&catalog), SimilarityIndex::new(matrix))?;
    tracing::info!(tracks = catalog.len(), "Recommender ready");

    // API server.
    let state = AppState::new(config, recommender);
    routes::start_server(state).await?;

    Ok(())
}
