//! Expanded editor of one point.
//!
//! The editor works on a draft copy. Offer toggles change only the draft; the
//! draft becomes the new record when the editor is submitted.

use crate::domain::{Offer, Point};
use crate::model::PointsModel;
use crate::ui::component::{Line, Span, Tone, View};
use crate::ui::helpers::{format_date_time, format_price};

#[derive(Debug, Clone)]
pub struct PointEditView {
    draft: Point,
    destination: String,
    description: String,
    offers: Vec<Offer>,
}

impl PointEditView {
    #[must_use]
    pub fn new(point: &Point, model: &PointsModel) -> Self {
        let (destination, description) = model.destination(&point.destination).map_or_else(
            || (point.destination.0.clone(), String::new()),
            |d| (d.name.clone(), d.description.clone()),
        );

        Self {
            draft: point.clone(),
            destination,
            description,
            offers: model.offers_by_type(point.point_type).to_vec(),
        }
    }

    /// The record as edited so far.
    #[must_use]
    pub const fn draft(&self) -> &Point {
        &self.draft
    }

    /// Toggles the offer at `index` (0-based, catalog order) in the draft.
    ///
    /// Returns `false` when the index is out of range.
    pub fn toggle_offer(&mut self, index: usize) -> bool {
        let Some(offer) = self.offers.get(index) else {
            return false;
        };
        self.draft = self.draft.with_offer_toggled(&offer.id);
        true
    }

    /// Base price plus the selected offers.
    #[must_use]
    pub fn total_price(&self) -> u32 {
        self.offers
            .iter()
            .filter(|offer| self.draft.has_offer(&offer.id))
            .fold(self.draft.base_price, |total, offer| total.saturating_add(offer.price))
    }
}

impl View for PointEditView {
    type Signal = ();

    fn template(&self) -> Vec<Line> {
        let draft = &self.draft;
        let mut lines = vec![
            Line::new(vec![
                Span::new("  ▾ ", Tone::Accent),
                Span::new(draft.point_type.label(), Tone::Accent),
                Span::normal(" to "),
                Span::new(self.destination.clone(), Tone::Title),
                Span::new(if draft.is_favorite { "  ★" } else { "  ☆" }, Tone::Favorite),
            ]),
            Line::new(vec![
                Span::new("    From ", Tone::Dim),
                Span::normal(format_date_time(draft.date_from)),
                Span::new("   To ", Tone::Dim),
                Span::normal(format_date_time(draft.date_to)),
            ]),
            Line::new(vec![
                Span::new("    Price ", Tone::Dim),
                Span::normal(format_price(draft.base_price)),
                Span::new("   Total ", Tone::Dim),
                Span::normal(format_price(self.total_price())),
            ]),
        ];

        if !self.offers.is_empty() {
            lines.push(Line::new(vec![Span::new("    Offers", Tone::Accent)]));
            for (index, offer) in self.offers.iter().enumerate() {
                let selected = draft.has_offer(&offer.id);
                let (mark, tone) = if selected { ("[x]", Tone::Checked) } else { ("[ ]", Tone::Normal) };
                lines.push(Line::new(vec![
                    Span::new(format!("    {} ", index + 1), Tone::Dim),
                    Span::new(format!("{mark} {}  +{}", offer.title, format_price(offer.price)), tone),
                ]));
            }
        }

        if !self.description.is_empty() {
            lines.push(Line::new(vec![Span::new(format!("    {}", self.description), Tone::Dim)]));
        }

        lines.push(Line::new(vec![Span::new(
            "    enter: save  esc: cancel  1-9: offers  f: favorite",
            Tone::Dim,
        )]));
        lines
    }
}
