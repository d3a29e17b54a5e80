//! Selection set and its read-only mirror.
//!
//! The list collaborator (cursor + toggle key) owns the [`SelectionSet`]. The
//! [`SelectionMirror`] only reads it to build the "selected" column.
//!
//! Selections are not reconciled against the active filter: a country hidden
//! by the filter stays selected and keeps appearing in the mirror.

use crate::domain::Country;

/// Countries selected in the list, in selection order, keyed by code.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    items: Vec<Country>,
}

impl SelectionSet {
    /// Selects `country`, or deselects it if already selected.
    ///
    /// Returns `true` if the country is selected afterwards.
    pub fn toggle(&mut self, country: &Country) -> bool {
        if let Some(pos) = self.items.iter().position(|c| c.code == country.code) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(country.clone());
            true
        }
    }

    /// Returns `true` if a country with `code` is selected.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.items.iter().any(|c| c.code == code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates selected countries in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &Country> + '_ {
        self.items.iter()
    }
}

/// Read-only view of a [`SelectionSet`] for the "selected" column.
///
/// # Example
///
/// ```rust
/// use countrypicker::app::{SelectionMirror, SelectionSet};
/// use countrypicker::domain::Country;
///
/// let mut set = SelectionSet::default();
/// set.toggle(&Country::new("fr", "France", "/flags"));
///
/// let mirror = SelectionMirror::new(&set);
/// assert_eq!(mirror.header(), "Country");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SelectionMirror<'a> {
    selection: &'a SelectionSet,
}

impl<'a> SelectionMirror<'a> {
    #[must_use]
    pub const fn new(selection: &'a SelectionSet) -> Self {
        Self { selection }
    }

    /// Header label for the current selection size.
    #[must_use]
    pub fn header(&self) -> String {
        selected_header(self.selection.len())
    }

    /// The selected countries, in selection order.
    pub fn items(&self) -> impl Iterator<Item = &'a Country> + 'a {
        self.selection.iter()
    }
}

/// Header label for `count` selected countries.
///
/// `0` → `"Countries"`, `1` → `"Country"`, otherwise `"Countries(N)"`.
///
/// # Example
///
/// ```rust
/// use countrypicker::app::selection::selected_header;
///
/// assert_eq!(selected_header(0), "Countries");
/// assert_eq!(selected_header(1), "Country");
/// assert_eq!(selected_header(5), "Countries(5)");
/// ```
#[must_use]
pub fn selected_header(count: usize) -> String {
    match count {
        0 => "Countries".to_string(),
        1 => "Country".to_string(),
        n => format!("Countries({n})"),
    }
}
