//! Filter input box.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Spaces left and right of the box.
const FILTER_BOX_MARGIN: usize = 2;

/// Draws the three-line filter box. Returns the row after it.
///
/// ```text
/// ┌──────────────────────┐
/// │ Filter: fra█         │
/// └──────────────────────┘
/// ```
///
/// An empty, unfocused box shows a dimmed placeholder. The block caret is
/// drawn only while the box has focus.
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(FILTER_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.filter_bar_border);

    position_cursor(row, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let (text, text_color) = if bar.query.is_empty() && !bar.is_focused {
        (" Filter countries".to_string(), &theme.colors.text_dim)
    } else {
        let caret = if bar.is_focused { "█" } else { "" };
        (format!(" Filter: {}{caret}", bar.query), &theme.colors.text_normal)
    };
    let text = truncate(&text, inner_width);
    let padding = inner_width.saturating_sub(text.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{border}│{}{text}{}", Theme::fg(text_color), " ".repeat(padding));
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
