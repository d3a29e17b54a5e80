//! View model types.
//!
//! Computed by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. Display-ready data only.

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    pub filter_bar: FilterBarInfo,

    /// Left column: the filtered countries around the cursor.
    pub list: ListPane,

    /// Right column: the selected countries.
    pub selected: ListPane,

    pub footer: FooterInfo,

    /// Shown in place of the list while loading or when nothing matches.
    pub empty_state: Option<EmptyState>,

    /// Filter generation this frame was computed for.
    pub generation: u64,
}

/// A titled column of rows.
#[derive(Debug, Clone)]
pub struct ListPane {
    pub title: String,
    pub items: Vec<DisplayItem>,
}

/// One country row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Regional indicator flag emoji.
    pub flag: String,

    pub label: String,

    /// Whether the list cursor is on this row.
    pub is_cursor: bool,

    /// Whether the country is selected.
    pub is_selected: bool,

    /// Character ranges of `label` to highlight, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Centered message with a dimmed subtitle.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// The filter input box.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    /// Raw input text, ahead of the debounced filter.
    pub query: String,
    pub is_focused: bool,
}
