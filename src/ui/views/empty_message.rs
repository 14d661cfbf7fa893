//! Placeholder shown when the current filter leaves no points.

use crate::domain::FilterType;
use crate::ui::component::{Line, Span, Tone, View};

/// Message text for an empty list under `filter`.
#[must_use]
pub const fn empty_message(filter: FilterType) -> &'static str {
    match filter {
        FilterType::Everything => "Click New Event to create your first point",
        FilterType::Past => "There are no past events now",
        FilterType::Present => "There are no present events now",
        FilterType::Future => "There are no future events now",
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EmptyListMessageView {
    filter: FilterType,
}

impl EmptyListMessageView {
    #[must_use]
    pub const fn new(filter: FilterType) -> Self {
        Self { filter }
    }

    #[must_use]
    pub const fn filter(&self) -> FilterType {
        self.filter
    }
}

impl View for EmptyListMessageView {
    type Signal = ();

    fn template(&self) -> Vec<Line> {
        vec![
            Line::default(),
            Line::new(vec![Span::new(format!("  {}", empty_message(self.filter)), Tone::Message)]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_filter_has_its_own_message() {
        let messages: Vec<&str> = FilterType::ALL.iter().map(|f| empty_message(*f)).collect();
        assert_eq!(messages[3], "There are no future events now");
        for (i, a) in messages.iter().enumerate() {
            assert!(messages[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn template_carries_the_message() {
        let view = EmptyListMessageView::new(FilterType::Past);
        let text: Vec<String> = view.template().iter().map(Line::text).collect();
        assert_eq!(text[1].trim(), "There are no past events now");
    }
}
