//! UI components and the frame layout.
//!
//! ```text
//! [blank]
//! [Header]
//! [Border]
//! [Filter bar - 3 lines]
//! [COUNTRY               ] [Selected Countries(N)]
//! [filtered rows...      ] [selected rows...     ]
//! [Border]
//! [Footer]
//! ```
//!
//! - [`header`]: Title bar with visible/total counts
//! - [`filter_bar`]: Filter input box
//! - [`list`]: Country columns
//! - [`footer`]: Key hints
//! - [`empty`]: Loading / no-match message in place of the list

mod empty;
mod filter_bar;
mod footer;
mod header;
mod list;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use filter_bar::render_filter_bar;
use footer::render_footer;
use header::render_header;
use list::render_pane;

/// Columns between the two panes.
const PANE_GAP: usize = 2;

/// Draws a horizontal rule. Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws a full frame.
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);

    let left_width = cols.saturating_sub(PANE_GAP) / 2;
    let right_col = left_width + PANE_GAP + 1;
    let right_width = cols.saturating_sub(right_col - 1);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 2, 1, left_width, empty, theme);
    } else {
        render_pane(current_row, 1, left_width, &vm.list, theme);
    }
    render_pane(current_row, right_col, right_width, &vm.selected, theme);

    let footer_row = rows.max(current_row + 2);
    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
