//! Segue Catalog crate - the immutable track catalog and its snapshot loader.
//!
//! The catalog is an ordered collection of tracks with stable 0-based
//! indices. It is built once from a JSON snapshot produced by the offline
//! pipeline and never mutated afterwards, so it can be shared across
//! concurrent queries without locking.

pub mod catalog;
pub mod loader;

pub use catalog::Catalog;
pub use loader::{load_catalog, TrackRecord};
