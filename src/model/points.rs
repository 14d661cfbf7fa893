//! The Points Model: points plus reference lookups.

use crate::domain::{Destination, DestinationId, Offer, OfferGroup, Point, PointType};
use crate::storage::TripData;
use std::collections::HashMap;

/// Read-only view of a trip used by the presenters.
///
/// Points are handed out as a slice; offers are looked up by point type and
/// destinations by id.
#[derive(Debug, Clone, Default)]
pub struct PointsModel {
    points: Vec<Point>,
    offers: HashMap<PointType, Vec<Offer>>,
    destinations: HashMap<DestinationId, Destination>,
}

impl PointsModel {
    /// Builds a model from raw parts.
    ///
    /// When two offer groups share a type, the later one wins.
    #[must_use]
    pub fn new(points: Vec<Point>, offers: Vec<OfferGroup>, destinations: Vec<Destination>) -> Self {
        let offers = offers
            .into_iter()
            .map(|group| (group.point_type, group.offers))
            .collect();
        let destinations = destinations
            .into_iter()
            .map(|destination| (destination.id.clone(), destination))
            .collect();

        Self {
            points,
            offers,
            destinations,
        }
    }

    /// Builds a model from a loaded trip document.
    #[must_use]
    pub fn from_trip(trip: TripData) -> Self {
        Self::new(trip.points, trip.offers, trip.destinations)
    }

    /// The full point set, in file order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Offers available for `point_type`; empty when the catalog has none.
    #[must_use]
    pub fn offers_by_type(&self, point_type: PointType) -> &[Offer] {
        self.offers.get(&point_type).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn destination(&self, id: &DestinationId) -> Option<&Destination> {
        self.destinations.get(id)
    }

    /// Display name of a destination, falling back to the raw id.
    #[must_use]
    pub fn destination_name<'a>(&'a self, id: &'a DestinationId) -> &'a str {
        self.destination(id).map_or(id.0.as_str(), |d| d.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OfferId;

    fn model() -> PointsModel {
        PointsModel::new(
            Vec::new(),
            vec![OfferGroup {
                point_type: PointType::Flight,
                offers: vec![Offer {
                    id: OfferId::from("meal"),
                    title: "Add meal".to_string(),
                    price: 15,
                }],
            }],
            vec![Destination {
                id: DestinationId::from("ams"),
                name: "Amsterdam".to_string(),
                description: String::new(),
                pictures: Vec::new(),
            }],
        )
    }

    #[test]
    fn offers_are_looked_up_by_type() {
        let model = model();
        assert_eq!(model.offers_by_type(PointType::Flight).len(), 1);
        assert!(model.offers_by_type(PointType::Bus).is_empty());
    }

    #[test]
    fn unknown_destination_falls_back_to_id() {
        let model = model();
        let ams = DestinationId::from("ams");
        let nowhere = DestinationId::from("xyz");
        assert_eq!(model.destination_name(&ams), "Amsterdam");
        assert_eq!(model.destination_name(&nowhere), "xyz");
    }
}
