//! Storage backend abstraction.
//!
//! The [`TripStorage`] trait covers exactly what the worker thread needs: read
//! the whole trip once, and persist a replaced point. Points are never inserted
//! or deleted through it.

use crate::domain::error::Result;
use crate::domain::Point;
use crate::storage::models::TripData;

/// Abstraction over persistent trip storage.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use tripboard::storage::{JsonStorage, TripStorage};
/// use std::path::PathBuf;
///
/// let storage = JsonStorage::new(PathBuf::from("/tmp/trip.json"))?;
/// let trip = storage.load_trip()?;
/// println!("{} points", trip.points.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait TripStorage: Send {
    /// Returns the full trip document.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn load_trip(&self) -> Result<TripData>;

    /// Replaces the stored point whose id matches `point.id`.
    ///
    /// Returns `Ok(false)` without writing when no stored point has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated trip fails.
    fn replace_point(&mut self, point: &Point) -> Result<bool>;
}
