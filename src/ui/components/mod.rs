//! Frame painters.
//!
//! - [`header`]: title and trip summary
//! - [`body`]: windowed surface lines with selection highlight
//! - [`footer`]: key hints or the last error
//! - [`empty`]: loading placeholder
//!
//! Layout of a loaded board:
//!
//! ```text
//! [blank line]
//! [Title]
//! [Trip file · counts]
//! [Border]
//! [Body lines]
//! [Blank padding]
//! [Border]
//! [Footer]
//! ```

mod body;
mod empty;
mod footer;
mod header;

pub use empty::render_loading_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use body::render_body;
use footer::render_footer;
use header::render_header;

/// Rows taken by everything except the body (blank, title, subtitle, two
/// borders, footer, trailing row).
pub const CHROME_ROWS: usize = 7;

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Paints the full board layout.
pub fn render_board(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_header(2, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_body(current_row, &vm.body, theme, cols);

    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
