//! Sort control.
//!
//! Shows the five sort columns of the itinerary. Event and Offers are never
//! selectable; Day, Time, and Price map to [`SortType`].

use crate::domain::SortType;
use crate::ui::component::{Line, Span, Tone, View};

/// One column of the sort control.
struct SortOption {
    label: &'static str,
    key: char,
    sort: Option<SortType>,
}

const OPTIONS: [SortOption; 5] = [
    SortOption { label: "Day", key: 'd', sort: Some(SortType::Day) },
    SortOption { label: "Event", key: ' ', sort: None },
    SortOption { label: "Time", key: 't', sort: Some(SortType::Time) },
    SortOption { label: "Price", key: '$', sort: Some(SortType::Price) },
    SortOption { label: "Offers", key: ' ', sort: None },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SortView {
    current: SortType,
}

impl SortView {
    #[must_use]
    pub const fn new(current: SortType) -> Self {
        Self { current }
    }

    #[must_use]
    pub const fn current(&self) -> SortType {
        self.current
    }

    pub fn set_current(&mut self, sort: SortType) {
        self.current = sort;
    }
}

impl View for SortView {
    type Signal = SortType;

    fn template(&self) -> Vec<Line> {
        let mut spans = vec![Span::new("  Sort    ", Tone::Accent)];
        for option in &OPTIONS {
            let span = match option.sort {
                Some(sort) if sort == self.current => {
                    Span::new(format!("(•) {} [{}]", option.label, option.key), Tone::Checked)
                }
                Some(_) => Span::normal(format!("( ) {} [{}]", option.label, option.key)),
                None => Span::new(format!("    {}", option.label), Tone::Disabled),
            };
            spans.push(span);
            spans.push(Span::normal("  "));
        }
        vec![Line::new(spans)]
    }

    fn on_key(&self, key: char) -> Option<SortType> {
        OPTIONS
            .iter()
            .filter(|option| option.key == key)
            .find_map(|option| option.sort)
    }
}
