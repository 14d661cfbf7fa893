//! Itinerary body: the windowed surface lines.

use crate::ui::component::{Line, Tone};
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BodyLine;

/// Paints `lines` from `row` downwards. Returns the next free row.
pub fn render_body(row: usize, lines: &[BodyLine], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for body_line in lines {
        current_row = render_line(current_row, body_line, theme, cols);
    }
    current_row
}

/// One row, cut to `cols`.
///
/// Selected rows use the selection colors for every span so the highlight
/// covers the full width; other rows color each span by its tone.
fn render_line(row: usize, body_line: &BodyLine, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if body_line.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }

    let used = render_spans(&body_line.line, theme, cols, body_line.is_selected);
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}

fn render_spans(line: &Line, theme: &Theme, cols: usize, selected: bool) -> usize {
    let mut used = 0;
    for span in &line.spans {
        let remaining = cols.saturating_sub(used);
        if remaining == 0 {
            break;
        }
        let text = truncate(&span.text, remaining);

        if !selected {
            print!("{}", Theme::fg(theme.tone_color(span.tone)));
        }
        if span.tone == Tone::Title {
            print!("{}", Theme::bold());
        }
        print!("{text}");
        if span.tone == Tone::Title {
            print!("{}", Theme::reset());
            if selected {
                print!("{}", Theme::fg(&theme.colors.selection_fg));
                print!("{}", Theme::bg(&theme.colors.selection_bg));
            }
        }

        used += text.chars().count();
    }
    used
}
