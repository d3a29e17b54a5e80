//! Top-level rendering entry point.

use crate::app::AppState;
use crate::ui::components;

/// Computes the view model and draws it to stdout.
///
/// Takes the state mutably because presenting rows records which flags have
/// been signaled. The caller collects those signals after rendering.
///
/// ```rust,no_run
/// use countrypicker::{AppState, Config, Theme};
///
/// let mut state = AppState::new(&Config::default(), Theme::default());
/// countrypicker::ui::render(&mut state, 24, 80);
/// let idle_wakeup = state.collect_flag_signals();
/// ```
pub fn render(state: &mut AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows);
    components::render_frame(&viewmodel, &state.theme, rows, cols);
}
