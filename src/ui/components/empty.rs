//! Placeholder painted while the trip is loading.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LoadingState;

/// Paints `loading` centered on rows 6 and 7.
pub fn render_loading_state(loading: &LoadingState, theme: &Theme, cols: usize) {
    render_centered(6, &loading.message, &Theme::fg(&theme.colors.message_fg), cols);

    let dim = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_centered(7, &loading.subtitle, &dim, cols);
}

fn render_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
