pub mod config;
pub mod error;
pub mod types;

pub use config::SegueConfig;
pub use error::{Result, SegueError};
pub use types::Track;
