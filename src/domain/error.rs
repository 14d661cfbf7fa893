//! Error types for the Tripboard plugin.
//!
//! This module defines the centralized error type [`TripboardError`] and a type alias
//! [`Result`] used by the storage, worker, and theme layers. The list
//! presenter itself has no failure modes: unknown point ids are dropped silently and
//! unknown filter/sort names fall back to their defaults.

use thiserror::Error;

/// The main error type for Tripboard operations.
///
/// Most variants carry a description string; I/O failures wrap the underlying
/// `std::io::Error` through `#[from]` so `?` works directly on filesystem calls.
///
/// # Examples
///
/// ```
/// use tripboard::TripboardError;
///
/// fn read_trip() -> Result<(), TripboardError> {
///     Err(TripboardError::Storage("trip file is not valid JSON".to_string()))
/// }
///
/// assert!(read_trip().is_err());
/// ```
#[derive(Debug, Error)]
pub enum TripboardError {
    /// Reading, parsing, or writing the trip file failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Covers (de)serialization of IPC payloads and a worker that has not been
    /// given a storage backend yet.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for Tripboard operations.
pub type Result<T> = std::result::Result<T, TripboardError>;
