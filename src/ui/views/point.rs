//! Display-mode row of one point.

use crate::domain::{Offer, Point};
use crate::model::PointsModel;
use crate::ui::component::{Line, Span, Tone, View};
use crate::ui::helpers::{format_day, format_duration, format_price, format_time};

/// A collapsed itinerary row: date, type, destination, times, price, favorite
/// star, then one line per selected offer.
#[derive(Debug, Clone)]
pub struct PointView {
    point: Point,
    destination: String,
    offers: Vec<Offer>,
}

impl PointView {
    #[must_use]
    pub fn new(point: &Point, model: &PointsModel) -> Self {
        let offers = model
            .offers_by_type(point.point_type)
            .iter()
            .filter(|offer| point.has_offer(&offer.id))
            .cloned()
            .collect();

        Self {
            point: point.clone(),
            destination: model.destination_name(&point.destination).to_string(),
            offers,
        }
    }

    #[must_use]
    pub const fn point(&self) -> &Point {
        &self.point
    }
}

impl View for PointView {
    type Signal = ();

    fn template(&self) -> Vec<Line> {
        let point = &self.point;
        let star = if point.is_favorite {
            Span::new("★", Tone::Favorite)
        } else {
            Span::new("☆", Tone::Dim)
        };

        let mut lines = vec![Line::new(vec![
            Span::new(format!("  {}  ", format_day(point.date_from)), Tone::Dim),
            Span::new(format!("{:<12}", point.point_type.label()), Tone::Accent),
            Span::new(format!("{:<16}", self.destination), Tone::Title),
            Span::normal(format!(
                "{} - {}  ",
                format_time(point.date_from),
                format_time(point.date_to)
            )),
            Span::new(format!("{:<12}", format_duration(point.duration())), Tone::Dim),
            Span::normal(format!("{:>6}  ", format_price(point.base_price))),
            star,
        ])];

        lines.extend(self.offers.iter().map(|offer| {
            Line::new(vec![Span::new(
                format!("            + {}  +{}", offer.title, format_price(offer.price)),
                Tone::Dim,
            )])
        }));
        lines
    }
}
