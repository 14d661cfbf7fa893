//! Travel point domain model and reference data.
//!
//! A [`Point`] is one event of the itinerary: a flight, a hotel check-in, a
//! museum visit. Points reference a [`Destination`] by id and select offers from
//! the per-type catalog ([`OfferGroup`]). Records are never mutated where they
//! are stored; an edit produces a full replacement record (see
//! [`Point::with_favorite_toggled`]).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a travel point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub String);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PointId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier of a destination in the reference data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(pub String);

impl From<&str> for DestinationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier of an offer inside an offer group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(pub String);

impl From<&str> for OfferId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Category of a travel point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointType {
    Taxi,
    Bus,
    Train,
    Ship,
    Drive,
    Flight,
    CheckIn,
    Sightseeing,
    Restaurant,
}

impl PointType {
    /// Display label used in list rows and the editor.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Taxi => "Taxi",
            Self::Bus => "Bus",
            Self::Train => "Train",
            Self::Ship => "Ship",
            Self::Drive => "Drive",
            Self::Flight => "Flight",
            Self::CheckIn => "Check-in",
            Self::Sightseeing => "Sightseeing",
            Self::Restaurant => "Restaurant",
        }
    }
}

/// A single travel event of the itinerary.
///
/// # Fields
///
/// - `id`: unique identifier, used as the key for updates
/// - `point_type`: category, also selects the offer group
/// - `date_from` / `date_to`: start and end of the event
/// - `base_price`: price before offers
/// - `destination`: reference into the destination list
/// - `offers`: ids of the selected offers of this point's type
/// - `is_favorite`: favorite flag toggled from the list row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub id: PointId,
    #[serde(rename = "type")]
    pub point_type: PointType,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub base_price: u32,
    pub destination: DestinationId,
    #[serde(default)]
    pub offers: Vec<OfferId>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Point {
    /// Length of the event (`date_to - date_from`).
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.date_to - self.date_from
    }

    /// Returns a replacement record with the favorite flag flipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tripboard::domain::{Point, PointType};
    ///
    /// let point = Point {
    ///     id: "3".into(),
    ///     point_type: PointType::Flight,
    ///     date_from: Utc.with_ymd_and_hms(2026, 3, 18, 10, 30, 0).unwrap(),
    ///     date_to: Utc.with_ymd_and_hms(2026, 3, 18, 11, 0, 0).unwrap(),
    ///     base_price: 160,
    ///     destination: "ams".into(),
    ///     offers: vec![],
    ///     is_favorite: false,
    /// };
    ///
    /// let updated = point.with_favorite_toggled();
    /// assert!(updated.is_favorite);
    /// assert!(!point.is_favorite);
    /// ```
    #[must_use]
    pub fn with_favorite_toggled(&self) -> Self {
        Self {
            is_favorite: !self.is_favorite,
            ..self.clone()
        }
    }

    /// Returns a replacement record with `offer` added to or removed from the selection.
    #[must_use]
    pub fn with_offer_toggled(&self, offer: &OfferId) -> Self {
        let mut offers = self.offers.clone();
        if let Some(pos) = offers.iter().position(|selected| selected == offer) {
            offers.remove(pos);
        } else {
            offers.push(offer.clone());
        }
        Self {
            offers,
            ..self.clone()
        }
    }

    /// Whether `offer` is part of this point's selection.
    #[must_use]
    pub fn has_offer(&self, offer: &OfferId) -> bool {
        self.offers.contains(offer)
    }
}

/// A purchasable add-on for points of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    pub price: u32,
}

/// All offers available for one point type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferGroup {
    #[serde(rename = "type")]
    pub point_type: PointType,
    pub offers: Vec<Offer>,
}

/// Photo attached to a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub src: String,
    #[serde(default)]
    pub description: String,
}

/// Reference data describing a place a point leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pictures: Vec<Picture>,
}
