//! Input focus state.
//!
//! Decides whether keys edit the filter text or drive the country list.

/// Where keyboard input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys move the list cursor and toggle selection.
    ///
    /// `j`/`k` navigate, `Space` toggles, `/` focuses the filter, `Esc`
    /// clears the filter, `q` closes.
    #[default]
    List,

    /// Keys edit the filter text.
    ///
    /// Every edit is debounced before the list is filtered. `Enter` and `Esc`
    /// return focus to the list, keeping the text.
    Filter,
}
