use thiserror::Error;

/// Top-level error type for the Segue system.
///
/// The query engine returns the three domain variants (`NotFound`,
/// `IndexOutOfRange`, `MalformedMatrix`) as values; they are never folded
/// into a default result. `MalformedMatrix` is fatal at load time — the
/// process refuses to serve queries against a matrix whose dimensions do
/// not match the catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SegueError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No track named '{name}' in the catalog")]
    NotFound { name: String },

    #[error("Index {index} out of range for catalog of {len} tracks")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Malformed similarity matrix: {0}")]
    MalformedMatrix(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for SegueError {
    fn from(err: toml::de::Error) -> Self {
        SegueError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SegueError {
    fn from(err: toml::ser::Error) -> Self {
        SegueError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SegueError {
    fn from(err: serde_json::Error) -> Self {
        SegueError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Segue operations.
pub type Result<T> = std::result::Result<T, SegueError>;
