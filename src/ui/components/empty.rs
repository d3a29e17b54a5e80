//! Empty state message.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Draws the message and its dimmed subtitle centered within `width`
/// columns starting at `col`, on `row` and `row + 1`.
pub fn render_empty_state(row: usize, col: usize, width: usize, empty: &EmptyState, theme: &Theme) {
    let msg_len = empty.message.chars().count();
    position_cursor(row, col + width.saturating_sub(msg_len) / 2);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", empty.message);
    print!("{}", Theme::reset());

    let sub_len = empty.subtitle.chars().count();
    position_cursor(row + 1, col + width.saturating_sub(sub_len) / 2);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", empty.subtitle);
    print!("{}", Theme::reset());
}
