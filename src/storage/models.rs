//! Storage record models for the trip file.
//!
//! [`TripData`] is the top-level document persisted on disk. It bundles the
//! itinerary points with the read-only reference data (offer catalog and
//! destinations) so one file describes a whole trip.

use crate::domain::{Destination, OfferGroup, Point};
use serde::{Deserialize, Serialize};

/// Current version of the trip file format.
pub const TRIP_FORMAT_VERSION: u32 = 1;

/// The trip document as stored on disk.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "points": [
///     {
///       "id": "1",
///       "type": "flight",
///       "dateFrom": "2026-03-18T10:30:00Z",
///       "dateTo": "2026-03-18T11:00:00Z",
///       "basePrice": 160,
///       "destination": "ams",
///       "offers": ["luggage"],
///       "isFavorite": false
///     }
///   ],
///   "offers": [
///     { "type": "flight", "offers": [{ "id": "luggage", "title": "Add luggage", "price": 50 }] }
///   ],
///   "destinations": [
///     { "id": "ams", "name": "Amsterdam", "description": "", "pictures": [] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripData {
    /// Version of the file format for future migrations.
    pub version: u32,

    #[serde(default)]
    pub points: Vec<Point>,

    #[serde(default)]
    pub offers: Vec<OfferGroup>,

    #[serde(default)]
    pub destinations: Vec<Destination>,
}

impl Default for TripData {
    fn default() -> Self {
        Self {
            version: TRIP_FORMAT_VERSION,
            points: Vec::new(),
            offers: Vec::new(),
            destinations: Vec::new(),
        }
    }
}

impl TripData {
    /// Creates a trip holding only `points`, with empty reference data.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripboard::storage::TripData;
    ///
    /// let trip = TripData::with_points(Vec::new());
    /// assert_eq!(trip.version, 1);
    /// assert!(trip.offers.is_empty());
    /// ```
    #[must_use]
    pub fn with_points(points: Vec<Point>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PointType;

    #[test]
    fn missing_sections_default_to_empty() {
        let trip: TripData = serde_json::from_str(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(trip, TripData::default());
    }

    #[test]
    fn parses_reference_data() {
        let json = r#"{
            "version": 1,
            "offers": [
                { "type": "taxi", "offers": [{ "id": "o1", "title": "Upgrade to business", "price": 120 }] }
            ],
            "destinations": [
                { "id": "gva", "name": "Geneva", "pictures": [{ "src": "gva.jpg" }] }
            ]
        }"#;

        let trip: TripData = serde_json::from_str(json).unwrap();
        assert_eq!(trip.offers[0].point_type, PointType::Taxi);
        assert_eq!(trip.offers[0].offers[0].price, 120);
        assert_eq!(trip.destinations[0].name, "Geneva");
        assert!(trip.destinations[0].description.is_empty());
    }
}
