//! JSON file-based trip storage.
//!
//! The whole trip is loaded into memory on creation and written back with an
//! atomic write (temp file + rename) after every change, so a crash never
//! leaves a half-written trip file behind.

use crate::domain::error::{Result, TripboardError};
use crate::domain::Point;
use crate::storage::backend::TripStorage;
use crate::storage::models::TripData;
use std::path::{Path, PathBuf};

/// JSON file storage backend.
///
/// `Send` but not `Sync`; it lives on the single worker thread.
pub struct JsonStorage {
    file_path: PathBuf,
    data: TripData,
    dirty: bool,
}

impl JsonStorage {
    /// Opens the trip file at `file_path`.
    ///
    /// A missing file yields an empty trip; nothing is written until the
    /// first change. Parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tripboard::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/trip.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("trip file missing, starting empty");
            TripData::default()
        };

        tracing::debug!(
            points = data.points.len(),
            offer_groups = data.offers.len(),
            destinations = data.destinations.len(),
            "storage initialized"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<TripData> {
        let contents = std::fs::read_to_string(path)?;
        let data: TripData = serde_json::from_str(&contents)
            .map_err(|e| TripboardError::Storage(format!("failed to parse trip file: {e}")))?;

        tracing::debug!(version = data.version, "loaded trip data");
        Ok(data)
    }

    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| TripboardError::Storage(format!("failed to serialize trip: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "trip saved");
        Ok(())
    }
}

impl TripStorage for JsonStorage {
    fn load_trip(&self) -> Result<TripData> {
        let _span = tracing::debug_span!("json_load_trip").entered();
        Ok(self.data.clone())
    }

    fn replace_point(&mut self, point: &Point) -> Result<bool> {
        let _span = tracing::debug_span!("json_replace_point", point_id = %point.id).entered();

        let Some(slot) = self.data.points.iter_mut().find(|p| p.id == point.id) else {
            tracing::debug!("point not in trip, nothing stored");
            return Ok(false);
        };

        if *slot == *point {
            return Ok(true);
        }

        *slot = point.clone();
        self.dirty = true;
        self.save_to_file()?;
        Ok(true)
    }
}

impl Drop for JsonStorage {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save trip on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DestinationId, PointId, PointType};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn point(id: &str) -> Point {
        Point {
            id: PointId::from(id),
            point_type: PointType::Train,
            date_from: Utc.with_ymd_and_hms(2026, 5, 2, 8, 0, 0).unwrap(),
            date_to: Utc.with_ymd_and_hms(2026, 5, 2, 9, 15, 0).unwrap(),
            base_price: 40,
            destination: DestinationId::from("chx"),
            offers: vec![],
            is_favorite: false,
        }
    }

    fn write_trip(dir: &TempDir, trip: &TripData) -> PathBuf {
        let path = dir.path().join("trip.json");
        std::fs::write(&path, serde_json::to_string(trip).unwrap()).unwrap();
        path
    }

    #[test]
    fn missing_file_is_an_empty_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("trip.json");

        let storage = JsonStorage::new(path.clone()).unwrap();

        assert_eq!(storage.load_trip().unwrap(), TripData::default());
        assert!(!path.exists());
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn invalid_json_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trip.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonStorage::new(path).err().unwrap();
        assert!(matches!(err, TripboardError::Storage(_)));
    }

    #[test]
    fn replaced_point_is_persisted() {
        let dir = TempDir::new().unwrap();
        let path = write_trip(&dir, &TripData::with_points(vec![point("1"), point("2")]));

        let mut storage = JsonStorage::new(path.clone()).unwrap();
        let updated = point("2").with_favorite_toggled();
        assert!(storage.replace_point(&updated).unwrap());
        drop(storage);

        let reopened = JsonStorage::new(path).unwrap();
        let trip = reopened.load_trip().unwrap();
        assert_eq!(trip.points, vec![point("1"), updated]);
        assert!(!dir.path().join("trip.tmp").exists());
    }

    #[test]
    fn unknown_point_is_not_inserted() {
        let dir = TempDir::new().unwrap();
        let path = write_trip(&dir, &TripData::with_points(vec![point("1")]));
        let before = std::fs::read_to_string(&path).unwrap();

        let mut storage = JsonStorage::new(path.clone()).unwrap();
        assert!(!storage.replace_point(&point("9")).unwrap());
        drop(storage);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }
}
