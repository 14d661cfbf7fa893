//! Domain layer for the Tripboard plugin.
//!
//! Travel point records, the time-window filters, the list orderings, and the
//! error type. Nothing here knows about Zellij or the render surface.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`point`]: Point, offer, and destination records
//! - [`filter`]: Past/present/future predicates and the filter generator
//! - [`sort`]: Day/time/price comparators
//!
//! # Examples
//!
//! ```
//! use tripboard::domain::{filter_points, sort_points, FilterType, SortType};
//!
//! let mut visible = filter_points(&[], FilterType::Future);
//! sort_points(&mut visible, SortType::Price);
//! assert!(visible.is_empty());
//! ```

pub mod error;
pub mod filter;
pub mod point;
pub mod sort;

pub use error::{Result, TripboardError};
pub use filter::{
    filter_points, filter_points_at, generate_filters, is_future_event, is_future_event_at,
    is_past_event, is_past_event_at, is_present_event, is_present_event_at, FilterEntry,
    FilterType,
};
pub use point::{
    Destination, DestinationId, Offer, OfferGroup, OfferId, Picture, Point, PointId, PointType,
};
pub use sort::{sort_by_day, sort_by_price, sort_by_time, sort_points, SortType};
