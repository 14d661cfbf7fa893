//! Time-window filters over travel points.
//!
//! Points are classified relative to "now": past (already ended), present
//! (running right now), or future (not started yet). The plain predicates read
//! the clock on every call, so two evaluations inside one render can disagree
//! for a point that starts or ends in between. The `_at` forms take an explicit
//! instant.

use super::point::Point;
use chrono::{DateTime, Utc};

/// Temporal filter applied to the full point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterType {
    #[default]
    Everything,
    Past,
    Present,
    Future,
}

impl FilterType {
    /// All filters in display order.
    pub const ALL: [Self; 4] = [Self::Everything, Self::Past, Self::Present, Self::Future];

    /// Parses a filter name, falling back to [`FilterType::Everything`] for
    /// anything unrecognized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard::domain::FilterType;
    ///
    /// assert_eq!(FilterType::from_name("past"), FilterType::Past);
    /// assert_eq!(FilterType::from_name("upcoming"), FilterType::Everything);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "past" => Self::Past,
            "present" => Self::Present,
            "future" => Self::Future,
            "everything" => Self::Everything,
            other => {
                tracing::debug!(filter = %other, "unknown filter type, using everything");
                Self::Everything
            }
        }
    }

    /// Lowercase name, the inverse of [`FilterType::from_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Everything => "everything",
            Self::Past => "past",
            Self::Present => "present",
            Self::Future => "future",
        }
    }

    /// Capitalized label for the filter control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Everything => "Everything",
            Self::Past => "Past",
            Self::Present => "Present",
            Self::Future => "Future",
        }
    }

    /// Whether `point` belongs to this filter at instant `now`.
    #[must_use]
    pub fn matches_at(self, point: &Point, now: DateTime<Utc>) -> bool {
        match self {
            Self::Everything => true,
            Self::Past => is_past_event_at(point, now),
            Self::Present => is_present_event_at(point, now),
            Self::Future => is_future_event_at(point, now),
        }
    }

    /// Whether `point` belongs to this filter right now.
    #[must_use]
    pub fn matches(self, point: &Point) -> bool {
        match self {
            Self::Everything => true,
            Self::Past => is_past_event(point),
            Self::Present => is_present_event(point),
            Self::Future => is_future_event(point),
        }
    }
}

/// `true` iff the point ended strictly before `now`.
#[must_use]
pub fn is_past_event_at(point: &Point, now: DateTime<Utc>) -> bool {
    point.date_to < now
}

/// `true` iff `now` lies within `[date_from, date_to]`.
#[must_use]
pub fn is_present_event_at(point: &Point, now: DateTime<Utc>) -> bool {
    point.date_from <= now && now <= point.date_to
}

/// `true` iff the point starts strictly after `now`.
#[must_use]
pub fn is_future_event_at(point: &Point, now: DateTime<Utc>) -> bool {
    point.date_from > now
}

#[must_use]
pub fn is_past_event(point: &Point) -> bool {
    is_past_event_at(point, Utc::now())
}

#[must_use]
pub fn is_present_event(point: &Point) -> bool {
    is_present_event_at(point, Utc::now())
}

#[must_use]
pub fn is_future_event(point: &Point) -> bool {
    is_future_event_at(point, Utc::now())
}

/// Returns the points matching `filter`, preserving input order.
#[must_use]
pub fn filter_points(points: &[Point], filter: FilterType) -> Vec<Point> {
    points
        .iter()
        .filter(|point| filter.matches(point))
        .cloned()
        .collect()
}

/// Same as [`filter_points`] with a fixed instant.
#[must_use]
pub fn filter_points_at(points: &[Point], filter: FilterType, now: DateTime<Utc>) -> Vec<Point> {
    points
        .iter()
        .filter(|point| filter.matches_at(point, now))
        .cloned()
        .collect()
}

/// One option of the filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterEntry {
    pub filter_type: FilterType,
    /// Number of points the filter selects when generated.
    pub count: usize,
    /// Disabled options cannot be selected.
    pub enabled: bool,
}

/// Builds the filter control options for a point set.
///
/// A filter is enabled when it selects at least one point.
#[must_use]
pub fn generate_filters(points: &[Point]) -> Vec<FilterEntry> {
    let now = Utc::now();
    FilterType::ALL
        .iter()
        .map(|&filter_type| {
            let count = points
                .iter()
                .filter(|point| filter_type.matches_at(point, now))
                .count();
            FilterEntry {
                filter_type,
                count,
                enabled: count > 0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::point::{DestinationId, PointId, PointType};
    use chrono::{Duration, TimeZone};

    fn point(id: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> Point {
        Point {
            id: PointId::from(id),
            point_type: PointType::Taxi,
            date_from: from,
            date_to: to,
            base_price: 10,
            destination: DestinationId::from("x"),
            offers: vec![],
            is_favorite: false,
        }
    }

    fn fixture() -> (DateTime<Utc>, Vec<Point>) {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let points = vec![
            point("yesterday", now - Duration::days(1) - Duration::hours(2), now - Duration::days(1)),
            point("today", now - Duration::hours(1), now + Duration::hours(1)),
            point("tomorrow", now + Duration::days(1), now + Duration::days(1) + Duration::hours(3)),
        ];
        (now, points)
    }

    #[test]
    fn each_predicate_holds_for_exactly_one_point() {
        let (now, points) = fixture();

        let past: Vec<bool> = points.iter().map(|p| is_past_event_at(p, now)).collect();
        let present: Vec<bool> = points.iter().map(|p| is_present_event_at(p, now)).collect();
        let future: Vec<bool> = points.iter().map(|p| is_future_event_at(p, now)).collect();

        assert_eq!(past, vec![true, false, false]);
        assert_eq!(present, vec![false, true, false]);
        assert_eq!(future, vec![false, false, true]);
    }

    #[test]
    fn present_bounds_are_inclusive() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let starts_now = point("a", now, now + Duration::hours(1));
        let ends_now = point("b", now - Duration::hours(1), now);

        assert!(is_present_event_at(&starts_now, now));
        assert!(!is_future_event_at(&starts_now, now));
        assert!(is_present_event_at(&ends_now, now));
        assert!(!is_past_event_at(&ends_now, now));
    }

    #[test]
    fn everything_keeps_all_points_in_order() {
        let (now, points) = fixture();
        assert_eq!(filter_points_at(&points, FilterType::Everything, now), points);
    }

    #[test]
    fn filtering_is_an_idempotent_subset() {
        let (now, points) = fixture();
        for filter in FilterType::ALL {
            let once = filter_points_at(&points, filter, now);
            let twice = filter_points_at(&once, filter, now);
            assert_eq!(once, twice, "{filter:?} is not idempotent");
            assert!(once.iter().all(|p| points.contains(p)));
        }
    }

    #[test]
    fn unknown_names_fall_back_to_everything() {
        assert_eq!(FilterType::from_name("FUTURE"), FilterType::Future);
        assert_eq!(FilterType::from_name(" present "), FilterType::Present);
        assert_eq!(FilterType::from_name("favorites"), FilterType::Everything);
        assert_eq!(FilterType::from_name(""), FilterType::Everything);
    }

    #[test]
    fn generated_filters_disable_empty_windows() {
        let now = Utc::now();
        let points = vec![point("next-week", now + Duration::days(7), now + Duration::days(8))];

        let entries = generate_filters(&points);
        let enabled: Vec<(FilterType, bool)> =
            entries.iter().map(|e| (e.filter_type, e.enabled)).collect();

        assert_eq!(
            enabled,
            vec![
                (FilterType::Everything, true),
                (FilterType::Past, false),
                (FilterType::Present, false),
                (FilterType::Future, true),
            ]
        );
        assert!(generate_filters(&[]).iter().all(|e| !e.enabled));
    }
}
