//! Top-level rendering entry point.
//!
//! ```text
//! AppState ── compute_viewmodel ──▶ UIViewModel ── components ──▶ stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Paints the board for a `rows` × `cols` pane to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(loading) = &vm.loading {
        components::render_loading_state(loading, theme, cols);
        return;
    }

    components::render_board(vm, theme, cols, rows);
}
