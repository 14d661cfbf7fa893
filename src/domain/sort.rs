//! Orderings over travel points.
//!
//! Each comparator compares a single key with no tie-break; [`sort_points`]
//! uses the standard library's stable sort so equal keys keep their previous
//! relative order.

use super::point::Point;
use std::cmp::Ordering;

/// Ordering key of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortType {
    #[default]
    Day,
    Time,
    Price,
}

impl SortType {
    /// Parses a sort name, falling back to [`SortType::Day`] for anything
    /// unrecognized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard::domain::SortType;
    ///
    /// assert_eq!(SortType::from_name("price"), SortType::Price);
    /// assert_eq!(SortType::from_name("offers"), SortType::Day);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "time" => Self::Time,
            "price" => Self::Price,
            "day" => Self::Day,
            other => {
                tracing::debug!(sort = %other, "unknown sort type, using day");
                Self::Day
            }
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Time => "time",
            Self::Price => "price",
        }
    }

    /// Comparator for this key.
    #[must_use]
    pub fn comparator(self) -> fn(&Point, &Point) -> Ordering {
        match self {
            Self::Day => sort_by_day,
            Self::Time => sort_by_time,
            Self::Price => sort_by_price,
        }
    }
}

/// Ascending by start timestamp.
#[must_use]
pub fn sort_by_day(a: &Point, b: &Point) -> Ordering {
    a.date_from.cmp(&b.date_from)
}

/// Ascending by duration.
#[must_use]
pub fn sort_by_time(a: &Point, b: &Point) -> Ordering {
    a.duration().cmp(&b.duration())
}

/// Ascending by base price.
#[must_use]
pub fn sort_by_price(a: &Point, b: &Point) -> Ordering {
    a.base_price.cmp(&b.base_price)
}

/// Stable in-place sort by `sort`.
pub fn sort_points(points: &mut [Point], sort: SortType) {
    points.sort_by(sort.comparator());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::point::{DestinationId, PointId, PointType};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn point(id: &str, start_hour: u32, minutes: i64, price: u32) -> Point {
        let date_from: DateTime<Utc> = Utc.with_ymd_and_hms(2026, 4, 1, start_hour, 0, 0).unwrap();
        Point {
            id: PointId::from(id),
            point_type: PointType::Bus,
            date_from,
            date_to: date_from + Duration::minutes(minutes),
            base_price: price,
            destination: DestinationId::from("x"),
            offers: vec![],
            is_favorite: false,
        }
    }

    fn fixture() -> Vec<Point> {
        vec![
            point("a", 15, 30, 300),
            point("b", 9, 240, 100),
            point("c", 12, 30, 100),
            point("d", 7, 90, 50),
        ]
    }

    fn ids(points: &[Point]) -> Vec<&str> {
        points.iter().map(|p| p.id.0.as_str()).collect()
    }

    #[test]
    fn day_orders_by_start() {
        let mut points = fixture();
        sort_points(&mut points, SortType::Day);
        assert_eq!(ids(&points), vec!["d", "b", "c", "a"]);
        assert!(points.windows(2).all(|w| w[0].date_from <= w[1].date_from));
    }

    #[test]
    fn time_orders_by_duration_and_keeps_ties_stable() {
        let mut points = fixture();
        sort_points(&mut points, SortType::Time);
        assert_eq!(ids(&points), vec!["a", "c", "d", "b"]);
        assert!(points.windows(2).all(|w| w[0].duration() <= w[1].duration()));
    }

    #[test]
    fn price_orders_by_base_price_and_keeps_ties_stable() {
        let mut points = fixture();
        sort_points(&mut points, SortType::Price);
        assert_eq!(ids(&points), vec!["d", "b", "c", "a"]);

        let mut reversed: Vec<Point> = fixture().into_iter().rev().collect();
        sort_points(&mut reversed, SortType::Price);
        assert_eq!(ids(&reversed), vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn sorting_twice_changes_nothing() {
        for sort in [SortType::Day, SortType::Time, SortType::Price] {
            let mut once = fixture();
            sort_points(&mut once, sort);
            let mut twice = once.clone();
            sort_points(&mut twice, sort);
            assert_eq!(once, twice, "{sort:?} is not idempotent");
        }
    }

    #[test]
    fn unknown_names_fall_back_to_day() {
        assert_eq!(SortType::from_name("TIME"), SortType::Time);
        assert_eq!(SortType::from_name("event"), SortType::Day);
    }
}
