//! Storage layer for the trip file.
//!
//! The trip (points, offer catalog, destinations) lives in one JSON document.
//! The worker thread owns the storage; the plugin thread only sees the data
//! through worker messages.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction
//! - `json`: JSON file-based implementation with atomic writes
//! - `models`: The on-disk trip document

pub mod backend;
pub mod json;
pub mod models;

pub use backend::TripStorage;
pub use json::JsonStorage;
pub use models::{TripData, TRIP_FORMAT_VERSION};
