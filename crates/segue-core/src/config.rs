use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SegueError};

/// Top-level configuration for the Segue application.
///
/// Loaded from `~/.segue/config.toml` by default. Each section corresponds
/// to one subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegueConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl SegueConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SegueConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SegueError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Data directory holding the catalog and matrix snapshots.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: "~/.segue/data".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Catalog and similarity snapshot file names, relative to `data_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON array of track records.
    pub catalog_file: String,
    /// JSON N×N array of similarity scores, row-major.
    pub matrix_file: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_file: "songs.json".to_string(),
            matrix_file: "similarity.json".to_string(),
        }
    }
}

/// Recommendation query settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Number of recommendations when the caller does not specify one.
    pub default_limit: usize,
    /// Hard cap on the number of recommendations per query.
    pub max_limit: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_limit: 5,
            max_limit: 50,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// TCP port for the API server (bound to 127.0.0.1).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3030 }
    }
}
