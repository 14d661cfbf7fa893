//! Filter control built from the generated filter entries.

use crate::domain::{FilterEntry, FilterType};
use crate::ui::component::{Line, Span, Tone, View};

#[derive(Debug, Clone)]
pub struct FilterView {
    entries: Vec<FilterEntry>,
    current: FilterType,
}

/// Key selecting each filter.
#[must_use]
pub const fn filter_key(filter: FilterType) -> char {
    match filter {
        FilterType::Everything => 'E',
        FilterType::Past => 'P',
        FilterType::Present => 'N',
        FilterType::Future => 'F',
    }
}

impl FilterView {
    #[must_use]
    pub const fn new(entries: Vec<FilterEntry>, current: FilterType) -> Self {
        Self { entries, current }
    }

    #[must_use]
    pub const fn current(&self) -> FilterType {
        self.current
    }

    pub fn set_current(&mut self, filter: FilterType) {
        self.current = filter;
    }

    #[must_use]
    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }
}

impl View for FilterView {
    type Signal = FilterType;

    fn template(&self) -> Vec<Line> {
        let mut spans = vec![Span::new("  Filter  ", Tone::Accent)];
        for entry in &self.entries {
            let filter = entry.filter_type;
            let label = format!("{} {} [{}]", filter.label(), entry.count, filter_key(filter));
            let span = if filter == self.current {
                Span::new(format!("(•) {label}"), Tone::Checked)
            } else if entry.enabled {
                Span::normal(format!("( ) {label}"))
            } else {
                Span::new(format!("( ) {label}"), Tone::Disabled)
            };
            spans.push(span);
            spans.push(Span::normal("  "));
        }
        vec![Line::new(spans)]
    }

    /// Disabled entries ignore their key.
    fn on_key(&self, key: char) -> Option<FilterType> {
        self.entries
            .iter()
            .find(|entry| filter_key(entry.filter_type) == key)
            .filter(|entry| entry.enabled)
            .map(|entry| entry.filter_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(filter_type: FilterType, count: usize) -> FilterEntry {
        FilterEntry {
            filter_type,
            count,
            enabled: count > 0,
        }
    }

    fn view() -> FilterView {
        FilterView::new(
            vec![
                entry(FilterType::Everything, 3),
                entry(FilterType::Past, 0),
                entry(FilterType::Present, 1),
                entry(FilterType::Future, 2),
            ],
            FilterType::Everything,
        )
    }

    #[test]
    fn enabled_keys_emit_their_filter() {
        let view = view();
        assert_eq!(view.on_key('F'), Some(FilterType::Future));
        assert_eq!(view.on_key('N'), Some(FilterType::Present));
        assert_eq!(view.on_key('E'), Some(FilterType::Everything));
    }

    #[test]
    fn disabled_and_unknown_keys_are_ignored() {
        let view = view();
        assert_eq!(view.on_key('P'), None);
        assert_eq!(view.on_key('f'), None);
    }

    #[test]
    fn template_marks_current_and_disabled() {
        let mut view = view();
        view.set_current(FilterType::Future);
        let line = &view.template()[0];

        let tone_of = |prefix: &str| {
            line.spans
                .iter()
                .find(|span| span.text.contains(prefix))
                .map(|span| span.tone)
        };
        assert_eq!(tone_of("Future"), Some(Tone::Checked));
        assert_eq!(tone_of("Past"), Some(Tone::Disabled));
        assert_eq!(tone_of("Everything"), Some(Tone::Normal));
    }
}
