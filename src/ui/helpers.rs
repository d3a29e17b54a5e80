//! Shared rendering helpers.
//!
//! Cursor positioning, character-based truncation and filter-match
//! highlighting. All ranges and widths count characters, never bytes, since
//! country names such as "Åland Islands" are not ASCII.

use crate::ui::theme::Theme;

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates `text` to `max` characters, ending with `...` when cut.
///
/// ```rust
/// use countrypicker::ui::helpers::truncate;
///
/// assert_eq!(truncate("Germany", 10), "Germany");
/// assert_eq!(truncate("Åland Islands", 8), "Åland...");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Splits `text` into `(segment, highlighted)` runs.
///
/// Ranges are `(start, end)` character indices, sorted and non-overlapping;
/// anything past the end of `text` is ignored.
///
/// ```rust
/// use countrypicker::ui::helpers::highlight_segments;
///
/// assert_eq!(
///     highlight_segments("France", &[(1, 2)]),
///     vec![("F".to_string(), false), ("r".to_string(), true), ("ance".to_string(), false)]
/// );
/// ```
#[must_use]
pub fn highlight_segments(text: &str, ranges: &[(usize, usize)]) -> Vec<(String, bool)> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < pos || start >= end {
            continue;
        }
        if start > pos {
            segments.push((chars[pos..start].iter().collect(), false));
        }
        segments.push((chars[start..end].iter().collect(), true));
        pos = end;
    }

    if pos < chars.len() {
        segments.push((chars[pos..].iter().collect(), false));
    }
    segments
}

/// Prints `text` with `ranges` in the theme's match colours.
///
/// `restore` is the escape sequence re-applied after each highlighted run so
/// the row keeps its own colours.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    for (segment, highlighted) in highlight_segments(text, ranges) {
        if highlighted {
            print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
            print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
            print!("{segment}");
            print!("{}", Theme::reset());
            print!("{restore}");
        } else {
            print!("{segment}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_without_ranges_is_whole_text() {
        assert_eq!(highlight_segments("Chad", &[]), vec![("Chad".to_string(), false)]);
    }

    #[test]
    fn segments_at_edges() {
        assert_eq!(
            highlight_segments("Chad", &[(0, 2), (3, 4)]),
            vec![
                ("Ch".to_string(), true),
                ("a".to_string(), false),
                ("d".to_string(), true),
            ]
        );
    }

    #[test]
    fn segments_clip_out_of_range() {
        assert_eq!(
            highlight_segments("Peru", &[(2, 10)]),
            vec![("Pe".to_string(), false), ("ru".to_string(), true)]
        );
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Curaçao", 7), "Curaçao");
        assert_eq!(truncate("Curaçao", 6), "Cur...");
        assert_eq!(truncate("Curaçao", 2), "Cu");
    }
}
