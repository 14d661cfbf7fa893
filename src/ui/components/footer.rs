//! Help bar.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Paints the key hints centered at `row`, or the last error if there is one.
///
/// Text wider than the pane is cut. Returns the next row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let (text, color) = footer.error.as_ref().map_or(
        (footer.keybindings.as_str(), &theme.colors.text_dim),
        |error| (error.as_str(), &theme.colors.error_fg),
    );

    let text = truncate(text, cols);
    let text_len = text.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
