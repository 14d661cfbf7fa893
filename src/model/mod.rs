//! In-memory model of a loaded trip.
//!
//! The [`PointsModel`] is what the list presenter reads at init: the full
//! point set plus the read-only offer catalog and destinations.

pub mod points;

pub use points::PointsModel;
