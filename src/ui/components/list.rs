//! Country columns.
//!
//! Each column is a title row followed by one row per [`DisplayItem`]:
//!
//! ```text
//! ✓ 🇫🇷 France
//! ```
//!
//! The check mark column is blank for unselected rows. The cursor row gets
//! the cursor colours across the whole column width.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ListPane};

/// Columns taken by the marker, the flag and the gap before the label.
const ROW_PREFIX_WIDTH: usize = 5;

/// Draws a pane starting at `row`, `col`, `width` columns wide.
///
/// Returns the row after the last item.
pub fn render_pane(row: usize, col: usize, width: usize, pane: &ListPane, theme: &Theme) -> usize {
    position_cursor(row, col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", helpers::truncate(&pane.title, width));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for item in &pane.items {
        render_row(current_row, col, width, item, theme);
        current_row += 1;
    }
    current_row
}

fn render_row(row: usize, col: usize, width: usize, item: &DisplayItem, theme: &Theme) {
    position_cursor(row, col);

    let row_style = if item.is_cursor {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.cursor_fg),
            Theme::bg(&theme.colors.cursor_bg)
        )
    } else if item.is_selected {
        Theme::fg(&theme.colors.selected_fg)
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{row_style}");

    let marker = if item.is_selected { "✓ " } else { "  " };
    print!("{marker}{} ", item.flag);

    let label_width = width.saturating_sub(ROW_PREFIX_WIDTH);
    let label = helpers::truncate(&item.label, label_width);
    let ranges: Vec<(usize, usize)> = item
        .highlight_ranges
        .iter()
        .map(|&(start, end)| (start, end.min(label.chars().count())))
        .collect();

    if item.is_cursor || ranges.is_empty() {
        print!("{label}");
    } else {
        helpers::render_highlighted_text(&label, &ranges, theme, &row_style);
    }

    let used = ROW_PREFIX_WIDTH + label.chars().count();
    print!("{}", " ".repeat(width.saturating_sub(used)));
    print!("{}", Theme::reset());
}
